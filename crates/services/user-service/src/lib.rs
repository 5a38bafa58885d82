//! User Service Library
//!
//! An in-memory user directory: a store indexed by username and by email
//! (`UserStore`) and a façade adding registration and password checks on
//! top of it (`UserManager`).
//!
//! ```
//! use user_service_lib::repository::{UserRepository, UserStore};
//! use user_service_lib::service::{UserManager, UserService};
//!
//! let mut store = UserStore::empty();
//! let mut users = UserManager::new(&mut store);
//! assert!(users.register_user_with_email("ali", "qwert", "ali@mail.com"));
//! assert!(users.login_with_email("ali@mail.com", "qwert"));
//!
//! assert_eq!(store.user_count(), 1);
//! ```
//!
//! Everything is synchronous and single-threaded. The store is not safe
//! for concurrent use without external synchronization.

pub mod config;
pub mod repository;
pub mod seed;
pub mod service;

pub use domain::{User, UserResponse};
pub use repository::{UserRepository, UserStore};
pub use service::{UserManager, UserService};
