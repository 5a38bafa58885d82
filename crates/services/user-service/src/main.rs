//! User Service - command line access to a seeded in-memory directory.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use common::{AppError, AppResult, DEFAULT_LOG_LEVEL};
use user_service_lib::config::UserServiceConfig;
use user_service_lib::seed::load_store;
use user_service_lib::{UserManager, UserRepository, UserResponse, UserService};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "In-memory user directory")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Roster file to build the directory from
    #[arg(short, long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List users in registration order
    List,
    /// Print the number of users
    Count,
    /// Validate the roster
    Check,
    /// Check a set of credentials
    Login(LoginArgs),
}

#[derive(Args)]
#[command(group(ArgGroup::new("identity").required(true).args(["username", "email"])))]
struct LoginArgs {
    /// Username to authenticate
    #[arg(long)]
    username: Option<String>,
    /// Email address to authenticate
    #[arg(long)]
    email: Option<String>,
    /// Password to check
    #[arg(long)]
    password: String,
}

fn main() {
    let cli = Cli::parse();
    let config = UserServiceConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    let filter = EnvFilter::try_new(config.service.log_filter(cli.verbose))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    tracing::debug!(service = %config.service.service_name, "Configuration loaded");

    if let Err(e) = run(cli, config) {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli, config: UserServiceConfig) -> AppResult<()> {
    let seed = cli.seed.or(config.seed_file);
    let mut store = load_store(seed.as_deref())?;

    match cli.command {
        Commands::List => {
            let users: Vec<UserResponse> =
                store.all_users().iter().map(UserResponse::from).collect();
            let rendered = serde_json::to_string_pretty(&users)
                .map_err(|e| AppError::internal(e.to_string()))?;
            println!("{}", rendered);
        }
        Commands::Count => {
            println!("{}", store.user_count());
        }
        Commands::Check => {
            println!("Roster valid: {} users", store.user_count());
        }
        Commands::Login(args) => {
            let service = UserManager::new(&mut store);
            let accepted = match (&args.username, &args.email) {
                (Some(username), _) => service.login_with_username(username, &args.password),
                (None, Some(email)) => service.login_with_email(email, &args.password),
                (None, None) => {
                    return Err(AppError::config("either --username or --email is required"))
                }
            };
            if !accepted {
                return Err(AppError::InvalidCredentials);
            }
            println!("Authenticated");
        }
    }

    Ok(())
}
