//! User repository contract.

use async_trait::async_trait;

use common::{AppResult, Context};
use domain::{User, UserFilter, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every read returns value snapshots; mutating a returned `User` has no
/// effect on the store until it is passed back through `save`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, ctx: &Context, id: UserId) -> AppResult<User>;

    /// Snapshot of every stored user, in no particular order
    async fn find_all(&self, ctx: &Context) -> Vec<User>;

    /// Users from a `find_all` snapshot that match the filter
    async fn find_by_filter(&self, ctx: &Context, filter: &UserFilter) -> Vec<User>;

    /// Insert or overwrite a user.
    ///
    /// An unassigned id is replaced with the next id from the counter.
    /// A caller-supplied id is an upsert with no collision check.
    async fn save(&self, ctx: &Context, user: User) -> User;

    /// Remove user by ID
    async fn delete(&self, ctx: &Context, id: UserId) -> AppResult<()>;

    /// Check if a user is stored under the id
    async fn exists_by_id(&self, ctx: &Context, id: UserId) -> bool;

    /// Number of stored users
    async fn count(&self, ctx: &Context) -> u64;
}
