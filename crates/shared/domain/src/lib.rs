//! Domain layer - Core user record and business rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The repository and service crates build on the types defined here.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{User, UserResponse};
