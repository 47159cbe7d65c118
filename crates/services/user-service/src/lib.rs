//! User Service Library
//!
//! This crate provides the concurrency-safe in-memory user store and the
//! thin service layer in front of it. It can be driven from the bundled
//! CLI or embedded in another binary.

pub mod config;
pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use common::Context;
use domain::{User, UserFilter};

use crate::repository::InMemoryUserRepository;
use crate::seed::{SeedError, SeedReport};
use crate::service::{UserManager, UserService};

/// Wire a fresh in-memory repository into a service.
pub fn build_user_service() -> Arc<dyn UserService> {
    let user_repo = Arc::new(InMemoryUserRepository::new());
    Arc::new(UserManager::new(user_repo))
}

/// Seed a fresh store concurrently and report the outcome.
pub async fn run_seed(count: usize, workers: usize) -> Result<SeedReport, SeedError> {
    let service = build_user_service();
    seed::seed_users(service, count, workers).await
}

/// Seed a fresh store, then return the users matching `filter`, sorted by id.
pub async fn run_query(
    count: usize,
    workers: usize,
    filter: &UserFilter,
) -> Result<Vec<User>, SeedError> {
    let service = build_user_service();
    seed::seed_users(Arc::clone(&service), count, workers).await?;

    let mut users = service.find_users(&Context::new(), filter).await;
    users.sort_by_key(|user| user.id);
    Ok(users)
}
