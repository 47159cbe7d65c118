//! In-memory user repository guarded by a single reader/writer lock.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult, Context, OptionExt};
use domain::{User, UserFilter, UserId, FIRST_USER_ID};

use super::UserRepository;

/// Map and id counter. Both live behind the same lock so that id
/// assignment and insertion happen in one critical section.
#[derive(Debug)]
struct UserTable {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            next_id: FIRST_USER_ID,
        }
    }
}

/// Process-lifetime user store. Construct one per owner; there is no
/// global instance.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Create an empty repository whose first assigned id is 1
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, _ctx: &Context, id: UserId) -> AppResult<User> {
        self.table
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or_not_found(id)
    }

    async fn find_all(&self, _ctx: &Context) -> Vec<User> {
        self.table.read().await.users.values().cloned().collect()
    }

    async fn find_by_filter(&self, ctx: &Context, filter: &UserFilter) -> Vec<User> {
        // Filtering runs on the snapshot, outside the lock
        let mut users = self.find_all(ctx).await;
        users.retain(|user| filter.matches(user));
        users
    }

    async fn save(&self, ctx: &Context, mut user: User) -> User {
        let mut table = self.table.write().await;

        if user.is_new() {
            user.id = table.next_id;
            table.next_id += 1;
        }

        let replaced = table.users.insert(user.id, user.clone()).is_some();
        drop(table);

        tracing::debug!(
            request_id = %ctx.request_id(),
            user_id = user.id,
            replaced,
            "User saved"
        );

        user
    }

    async fn delete(&self, ctx: &Context, id: UserId) -> AppResult<()> {
        let removed = self.table.write().await.users.remove(&id);

        match removed {
            Some(_) => {
                tracing::debug!(request_id = %ctx.request_id(), user_id = id, "User deleted");
                Ok(())
            }
            None => Err(AppError::not_found(id)),
        }
    }

    async fn exists_by_id(&self, _ctx: &Context, id: UserId) -> bool {
        self.table.read().await.users.contains_key(&id)
    }

    async fn count(&self, _ctx: &Context) -> u64 {
        self.table.read().await.users.len() as u64
    }
}
