//! Service layer - use cases over the repository.

mod user_service;

pub use user_service::{UserManager, UserService};
