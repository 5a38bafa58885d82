//! User service - Registration, authentication and email changes.
//!
//! SOLID (SRP): Handles user-related use cases only; storage rules live in
//! the repository.

use tracing::debug;

use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
pub trait UserService {
    /// Register a user without an email address
    fn register_user(&mut self, username: &str, password: &str) -> bool;

    /// Register a user with an email address
    fn register_user_with_email(&mut self, username: &str, password: &str, email: &str) -> bool;

    /// Check a username/password pair
    fn login_with_username(&self, username: &str, password: &str) -> bool;

    /// Check an email/password pair
    fn login_with_email(&self, email: &str, password: &str) -> bool;

    /// Remove a user by username
    fn remove_user(&mut self, username: &str) -> bool;

    /// Replace a user's email (`None` clears it)
    fn change_user_email(&mut self, username: &str, new_email: Option<String>) -> bool;

    /// Snapshot of all users in registration order
    fn all_users(&self) -> Vec<User>;

    /// Number of registered users
    fn user_count(&self) -> usize;
}

/// Concrete implementation of UserService over a borrowed repository.
///
/// The caller owns the repository and gets direct access back once the
/// manager is dropped.
pub struct UserManager<'a, R: UserRepository + ?Sized> {
    repo: &'a mut R,
}

impl<'a, R: UserRepository + ?Sized> UserManager<'a, R> {
    /// Create new user service instance with repository
    pub fn new(repo: &'a mut R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying repository
    pub fn repository(&self) -> &R {
        self.repo
    }
}

impl<'a, R: UserRepository + ?Sized> UserService for UserManager<'a, R> {
    fn register_user(&mut self, username: &str, password: &str) -> bool {
        self.repo.add_user(User::new(username, password))
    }

    fn register_user_with_email(&mut self, username: &str, password: &str, email: &str) -> bool {
        self.repo.add_user(User::with_email(username, password, email))
    }

    fn login_with_username(&self, username: &str, password: &str) -> bool {
        match self.repo.get_user_by_username(username) {
            Some(user) => {
                let accepted = user.password_matches(password);
                debug!(username, accepted, "Login by username");
                accepted
            }
            None => {
                debug!(username, "Login by username: unknown user");
                false
            }
        }
    }

    fn login_with_email(&self, email: &str, password: &str) -> bool {
        match self.repo.get_user_by_email(email) {
            Some(user) => {
                let accepted = user.password_matches(password);
                debug!(username = user.username(), accepted, "Login by email");
                accepted
            }
            None => {
                debug!(email, "Login by email: unknown email");
                false
            }
        }
    }

    fn remove_user(&mut self, username: &str) -> bool {
        self.repo.remove_user(username)
    }

    fn change_user_email(&mut self, username: &str, new_email: Option<String>) -> bool {
        self.repo.change_user_email(username, new_email)
    }

    fn all_users(&self) -> Vec<User> {
        self.repo.all_users()
    }

    fn user_count(&self) -> usize {
        self.repo.user_count()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::MockUserRepository;

    #[test]
    fn test_register_user_delegates_without_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_add_user()
            .with(eq(User::new("reza", "123abc")))
            .times(1)
            .return_const(true);

        let mut service = UserManager::new(&mut repo);
        assert!(service.register_user("reza", "123abc"));
    }

    #[test]
    fn test_register_user_with_email_passes_through_rejection() {
        let mut repo = MockUserRepository::new();
        repo.expect_add_user()
            .with(eq(User::with_email("user2", "pass2", "user1@mail.com")))
            .times(1)
            .return_const(false);

        let mut service = UserManager::new(&mut repo);
        assert!(!service.register_user_with_email("user2", "pass2", "user1@mail.com"));
    }

    #[test]
    fn test_login_with_username_checks_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_username()
            .returning(|_| Some(User::new("admin", "1234")));

        let service = UserManager::new(&mut repo);
        assert!(service.login_with_username("admin", "1234"));
        assert!(!service.login_with_username("admin", "abcd"));
    }

    #[test]
    fn test_login_with_username_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_username().returning(|_| None);

        let service = UserManager::new(&mut repo);
        assert!(!service.login_with_username("ahmad", "abcd"));
    }

    #[test]
    fn test_login_with_email_checks_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_email()
            .returning(|_| Some(User::with_email("user1", "pass1", "user1@mail.com")));

        let service = UserManager::new(&mut repo);
        assert!(service.login_with_email("user1@mail.com", "pass1"));
        assert!(!service.login_with_email("user1@mail.com", "pass2"));
    }

    #[test]
    fn test_login_with_email_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_email().returning(|_| None);

        let service = UserManager::new(&mut repo);
        assert!(!service.login_with_email("user1@mail.com", "pass1"));
    }

    #[test]
    fn test_change_user_email_delegates() {
        let mut repo = MockUserRepository::new();
        repo.expect_change_user_email()
            .withf(|username, new_email| username == "user1" && new_email.is_none())
            .times(1)
            .return_const(true);

        let mut service = UserManager::new(&mut repo);
        assert!(service.change_user_email("user1", None));
    }

    #[test]
    fn test_remove_user_delegates() {
        let mut repo = MockUserRepository::new();
        repo.expect_remove_user().times(1).return_const(false);

        let mut service = UserManager::new(&mut repo);
        assert!(!service.remove_user("user1"));
    }

    #[test]
    fn test_all_users_and_count_delegate() {
        let mut repo = MockUserRepository::new();
        repo.expect_all_users()
            .returning(|| vec![User::new("admin", "1234"), User::new("ali", "qwert")]);
        repo.expect_user_count().return_const(2usize);

        let service = UserManager::new(&mut repo);
        assert_eq!(service.all_users().len(), 2);
        assert_eq!(service.user_count(), 2);
    }
}
