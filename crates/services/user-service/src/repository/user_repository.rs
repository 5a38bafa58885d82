//! In-memory user repository indexed by username and by email.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use domain::{is_valid_username, DomainError, DomainResult, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Rejected mutations return `false` and leave the repository unchanged.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository {
    /// Find user by exact username
    fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Find user by exact email address
    fn get_user_by_email(&self, email: &str) -> Option<User>;

    /// Insert a new user; fails on a taken username or email
    fn add_user(&mut self, user: User) -> bool;

    /// Remove user by username, together with its email entry
    fn remove_user(&mut self, username: &str) -> bool;

    /// Number of stored users
    fn user_count(&self) -> usize;

    /// Snapshot of all users in insertion order
    fn all_users(&self) -> Vec<User>;

    /// Replace a user's email (`None` clears it)
    fn change_user_email(&mut self, username: &str, new_email: Option<String>) -> bool;
}

/// Concrete in-memory implementation of UserRepository.
///
/// Both indices are private: `users_by_username` holds the only copy of
/// each record and `usernames_by_email` points back into it by key.
///
/// Not safe for concurrent use without external synchronization.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users_by_username: HashMap<String, User>,
    usernames_by_email: HashMap<String, String>,
    insertion_order: Vec<String>,
}

impl UserStore {
    /// Build a store from an initial roster, preserving its order.
    ///
    /// # Errors
    /// Returns `DuplicateUsername` or `DuplicateEmail` if two records share
    /// a key, and `Validation` for an empty username. Nothing is built on
    /// failure.
    pub fn new(users: Vec<User>) -> DomainResult<Self> {
        Self::validate_roster(&users)?;

        let mut store = Self::default();
        for user in users {
            store.insert(user);
        }

        info!(count = store.user_count(), "User store initialised");
        Ok(store)
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    fn validate_roster(users: &[User]) -> DomainResult<()> {
        let mut usernames = HashSet::with_capacity(users.len());
        for user in users {
            if !is_valid_username(user.username()) {
                return Err(DomainError::validation("Username must not be empty"));
            }
            if !usernames.insert(user.username()) {
                return Err(DomainError::duplicate_username(user.username()));
            }
        }

        let mut emails = HashSet::with_capacity(users.len());
        for email in users.iter().filter_map(User::email) {
            if !emails.insert(email) {
                return Err(DomainError::duplicate_email(email));
            }
        }

        Ok(())
    }

    /// Insert without checks; callers have already validated the keys.
    fn insert(&mut self, user: User) {
        let username = user.username().to_string();
        if let Some(email) = user.email() {
            self.usernames_by_email
                .insert(email.to_string(), username.clone());
        }
        self.insertion_order.push(username.clone());
        self.users_by_username.insert(username, user);
    }
}

impl UserRepository for UserStore {
    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users_by_username.get(username).cloned()
    }

    fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.usernames_by_email
            .get(email)
            .and_then(|username| self.users_by_username.get(username))
            .cloned()
    }

    fn add_user(&mut self, user: User) -> bool {
        if !is_valid_username(user.username()) {
            debug!("Rejected user with empty username");
            return false;
        }
        if self.users_by_username.contains_key(user.username()) {
            debug!(username = user.username(), "Rejected user: username taken");
            return false;
        }
        if let Some(email) = user.email() {
            if self.usernames_by_email.contains_key(email) {
                debug!(username = user.username(), email, "Rejected user: email taken");
                return false;
            }
        }

        debug!(username = user.username(), "User added");
        self.insert(user);
        true
    }

    fn remove_user(&mut self, username: &str) -> bool {
        let Some(user) = self.users_by_username.remove(username) else {
            debug!(username, "Remove failed: unknown user");
            return false;
        };

        if let Some(email) = user.email() {
            self.usernames_by_email.remove(email);
        }
        self.insertion_order.retain(|key| key != username);

        debug!(username, "User removed");
        true
    }

    fn user_count(&self) -> usize {
        self.users_by_username.len()
    }

    fn all_users(&self) -> Vec<User> {
        self.insertion_order
            .iter()
            .filter_map(|username| self.users_by_username.get(username))
            .cloned()
            .collect()
    }

    fn change_user_email(&mut self, username: &str, new_email: Option<String>) -> bool {
        let Some(user) = self.users_by_username.get_mut(username) else {
            debug!(username, "Email change failed: unknown user");
            return false;
        };

        if let Some(email) = new_email.as_deref() {
            let taken = self
                .usernames_by_email
                .get(email)
                .is_some_and(|owner| owner != username);
            if taken {
                debug!(username, email, "Email change failed: email taken");
                return false;
            }
        }

        if let Some(old_email) = user.email() {
            self.usernames_by_email.remove(old_email);
        }
        if let Some(email) = &new_email {
            self.usernames_by_email
                .insert(email.clone(), username.to_string());
        }
        user.set_email(new_email);

        debug!(username, "Email changed");
        true
    }
}
