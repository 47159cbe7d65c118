//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity, the user filter and their validation rules.

pub mod constants;
pub mod error;
pub mod filter;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use filter::UserFilter;
pub use user::{NewUser, User, UserId};
