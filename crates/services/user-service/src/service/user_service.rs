//! User service - Handles user-related business logic.
//!
//! Validates creation input and otherwise forwards to the repository
//! unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, Context};
use domain::{NewUser, User, UserFilter, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, ctx: &Context, id: UserId) -> AppResult<User>;

    /// List every user, unordered
    async fn list_users(&self, ctx: &Context) -> Vec<User>;

    /// List users matching the filter, unordered
    async fn find_users(&self, ctx: &Context, filter: &UserFilter) -> Vec<User>;

    /// Create a new, active user. Name and email must be non-empty.
    async fn create_user(&self, ctx: &Context, name: String, email: String) -> AppResult<User>;

    /// Store the user as given (upsert when the id is set)
    async fn update_user(&self, ctx: &Context, user: User) -> User;

    /// Delete user by ID
    async fn delete_user(&self, ctx: &Context, id: UserId) -> AppResult<()>;

    /// Check if a user exists
    async fn user_exists(&self, ctx: &Context, id: UserId) -> bool;

    /// Number of stored users
    async fn count_users(&self, ctx: &Context) -> u64;

    /// Set the active flag and persist it
    async fn activate_user(&self, ctx: &Context, id: UserId) -> AppResult<User>;

    /// Clear the active flag and persist it
    async fn deactivate_user(&self, ctx: &Context, id: UserId) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    async fn set_active(&self, ctx: &Context, id: UserId, active: bool) -> AppResult<User> {
        let mut user = self.repo.find_by_id(ctx, id).await?;
        if active {
            user.activate();
        } else {
            user.deactivate();
        }
        Ok(self.repo.save(ctx, user).await)
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, ctx: &Context, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(ctx, id).await
    }

    async fn list_users(&self, ctx: &Context) -> Vec<User> {
        self.repo.find_all(ctx).await
    }

    async fn find_users(&self, ctx: &Context, filter: &UserFilter) -> Vec<User> {
        self.repo.find_by_filter(ctx, filter).await
    }

    async fn create_user(&self, ctx: &Context, name: String, email: String) -> AppResult<User> {
        let input = NewUser::new(name, email);
        if let Err(err) = input.validate() {
            tracing::warn!(request_id = %ctx.request_id(), error = %err, "Rejected user creation");
            return Err(AppError::from(err));
        }

        let user = self.repo.save(ctx, input.into_user()).await;
        tracing::info!(request_id = %ctx.request_id(), user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, ctx: &Context, user: User) -> User {
        self.repo.save(ctx, user).await
    }

    async fn delete_user(&self, ctx: &Context, id: UserId) -> AppResult<()> {
        self.repo.delete(ctx, id).await
    }

    async fn user_exists(&self, ctx: &Context, id: UserId) -> bool {
        self.repo.exists_by_id(ctx, id).await
    }

    async fn count_users(&self, ctx: &Context) -> u64 {
        self.repo.count(ctx).await
    }

    async fn activate_user(&self, ctx: &Context, id: UserId) -> AppResult<User> {
        self.set_active(ctx, id, true).await
    }

    async fn deactivate_user(&self, ctx: &Context, id: UserId) -> AppResult<User> {
        self.set_active(ctx, id, false).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn create_test_user(id: UserId) -> User {
        let mut user = User::new("Test User", "test@example.com");
        user.id = id;
        user
    }

    #[tokio::test]
    async fn test_create_user_rejects_empty_name_without_touching_repo() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .create_user(&Context::new(), String::new(), "a@b.com".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { field: "name", .. }
        ));
    }

    #[tokio::test]
    async fn test_create_user_rejects_empty_email_without_touching_repo() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .create_user(&Context::new(), "Alice".to_string(), String::new())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { field: "email", .. }
        ));
    }

    #[tokio::test]
    async fn test_create_user_saves_new_active_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .withf(|_, user| user.is_new() && user.active && user.name == "Alice")
            .times(1)
            .returning(|_, mut user| {
                user.id = 1;
                user
            });

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(&Context::new(), "Alice".to_string(), "a@b.com".to_string())
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert!(user.active);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(mockall::predicate::always(), eq(9))
            .returning(|_, id| Err(AppError::not_found(id)));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(&Context::new(), 9).await;

        assert_eq!(result.unwrap_err(), AppError::not_found(9));
    }

    #[tokio::test]
    async fn test_deactivate_user_goes_through_save() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_, id| Ok(create_test_user(id)));
        repo.expect_save()
            .withf(|_, user| user.id == 4 && !user.active)
            .times(1)
            .returning(|_, user| user);

        let service = UserManager::new(Arc::new(repo));
        let user = service.deactivate_user(&Context::new(), 4).await.unwrap();

        assert!(!user.active);
    }

    #[tokio::test]
    async fn test_activate_missing_user_does_not_save() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_, id| Err(AppError::not_found(id)));
        repo.expect_save().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.activate_user(&Context::new(), 12).await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_user_forwards_to_repo() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .with(mockall::predicate::always(), eq(3))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.delete_user(&Context::new(), 3).await.is_ok());
    }

    #[tokio::test]
    async fn test_find_users_forwards_filter() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_filter()
            .withf(|_, filter| filter.active == Some(true))
            .returning(|_, _| vec![create_test_user(1), create_test_user(3)]);

        let service = UserManager::new(Arc::new(repo));
        let users = service
            .find_users(&Context::new(), &UserFilter::new().active(true))
            .await;

        assert_eq!(users.len(), 2);
    }
}
