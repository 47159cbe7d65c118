//! Common utilities shared across services.
//!
//! This crate provides:
//! - The closed application error taxonomy
//! - The per-call context (request id + cancellation signal)
//! - Configuration structures

pub mod config;
pub mod context;
pub mod error;

pub use config::*;
pub use context::Context;
pub use error::{AppError, AppResult, OptionExt};
