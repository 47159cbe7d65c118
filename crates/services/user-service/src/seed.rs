//! Concurrent seeding of sample users through the service layer.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};

use common::{AppError, Context};
use domain::UserId;

use crate::service::UserService;

const SAMPLE_NAMES: &[&str] = &["Alice", "Bob", "Albert", "Carol", "Alfred", "Dave"];

/// Every user whose index has this remainder mod 3 is deactivated.
const INACTIVE_REMAINDER: usize = 2;

/// Seeding failures.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Seeding task failed: {0}")]
    Join(#[from] JoinError),
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Users created by this run
    pub created: usize,
    /// Users deactivated after creation
    pub deactivated: usize,
    /// Stored users once every task finished
    pub stored: u64,
    /// Smallest id assigned during the run
    pub min_id: Option<UserId>,
    /// Largest id assigned during the run
    pub max_id: Option<UserId>,
}

/// Name and email for the `index`-th sample user
pub fn sample_identity(index: usize) -> (String, String) {
    let base = SAMPLE_NAMES[index % SAMPLE_NAMES.len()];
    (
        format!("{} {}", base, index),
        format!("{}{}@example.com", base.to_lowercase(), index),
    )
}

/// Create `count` users from `workers` concurrent tasks.
///
/// Users are split round-robin across tasks. Every third user is
/// deactivated so that filtered queries have something to exclude.
pub async fn seed_users(
    service: Arc<dyn UserService>,
    count: usize,
    workers: usize,
) -> Result<SeedReport, SeedError> {
    let workers = workers.max(1);
    let mut tasks = JoinSet::new();

    for worker in 0..workers {
        let service = Arc::clone(&service);
        tasks.spawn(async move {
            let ctx = Context::new();
            let mut assigned = Vec::new();
            let mut deactivated = 0usize;

            for index in (worker..count).step_by(workers) {
                let (name, email) = sample_identity(index);
                let user = service.create_user(&ctx, name, email).await?;
                if index % 3 == INACTIVE_REMAINDER {
                    service.deactivate_user(&ctx, user.id).await?;
                    deactivated += 1;
                }
                assigned.push(user.id);
            }

            tracing::debug!(worker, created = assigned.len(), "Seeding task finished");
            Ok::<_, AppError>((assigned, deactivated))
        });
    }

    let mut ids = Vec::with_capacity(count);
    let mut deactivated = 0;
    while let Some(joined) = tasks.join_next().await {
        let (assigned, inactive) = joined??;
        ids.extend(assigned);
        deactivated += inactive;
    }

    let stored = service.count_users(&Context::new()).await;
    tracing::info!(created = ids.len(), stored, workers, "Seeding complete");

    Ok(SeedReport {
        created: ids.len(),
        deactivated,
        stored,
        min_id: ids.iter().copied().min(),
        max_id: ids.iter().copied().max(),
    })
}
