//! Roster loading for building a store from a JSON seed file.
//!
//! A roster is a JSON array of `{ "username", "password", "email"? }`
//! objects. Loading never writes anything back.

use std::fs;
use std::path::Path;

use tracing::info;

use common::AppResult;
use domain::User;

use crate::repository::UserStore;

/// Parse a roster from JSON text
pub fn parse_roster(json: &str) -> AppResult<Vec<User>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a roster file
pub fn load_roster(path: &Path) -> AppResult<Vec<User>> {
    let raw = fs::read_to_string(path)?;
    let users = parse_roster(&raw)?;
    info!(path = %path.display(), count = users.len(), "Roster loaded");
    Ok(users)
}

/// Build a store from an optional roster file (empty when `None`)
pub fn load_store(path: Option<&Path>) -> AppResult<UserStore> {
    match path {
        Some(path) => Ok(UserStore::new(load_roster(path)?)?),
        None => Ok(UserStore::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use domain::DomainError;

    #[test]
    fn test_parse_roster_with_optional_email() {
        let users = parse_roster(
            r#"[
                {"username": "admin", "password": "1234"},
                {"username": "user1", "password": "pass1", "email": "user1@mail.com"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            users,
            vec![
                User::new("admin", "1234"),
                User::with_email("user1", "pass1", "user1@mail.com"),
            ]
        );
    }

    #[test]
    fn test_parse_roster_rejects_missing_password() {
        let result = parse_roster(r#"[{"username": "admin"}]"#);
        assert!(matches!(result, Err(AppError::Seed(_))));
    }

    #[test]
    fn test_load_store_without_path_is_empty() {
        let store = load_store(None).unwrap();
        assert_eq!(crate::repository::UserRepository::user_count(&store), 0);
    }

    #[test]
    fn test_load_store_missing_file() {
        let result = load_store(Some(Path::new("/nonexistent/roster.json")));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_load_store_reports_duplicate_username() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(
            &path,
            r#"[{"username": "ali", "password": "a"}, {"username": "ali", "password": "b"}]"#,
        )
        .unwrap();

        let result = load_store(Some(&path));
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::DuplicateUsername(name))) if name == "ali"
        ));
    }
}
