//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_EMAIL, FIELD_NAME, UNASSIGNED_ID, UNKNOWN_USER_DISPLAY_NAME};
use crate::error::{DomainError, DomainResult};

/// User identifier. Zero is reserved for "unassigned".
pub type UserId = i64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl User {
    /// Create a new, active user with an unassigned id
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
            active: true,
        }
    }

    /// Check if the repository has not assigned an id yet
    pub fn is_new(&self) -> bool {
        self.id == UNASSIGNED_ID
    }

    /// Weak, advisory email check: non-empty and contains `@` and `.`.
    ///
    /// Nothing in the store enforces this.
    pub fn has_valid_email(&self) -> bool {
        !self.email.is_empty() && self.email.contains('@') && self.email.contains('.')
    }

    /// Name for display, falling back when the name is empty
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNKNOWN_USER_DISPLAY_NAME
        } else {
            self.name.as_str()
        }
    }

    /// Mark the user active. Persist through the repository's `save`.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Mark the user inactive. Persist through the repository's `save`.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User{{ID: {}, Name: {}, Email: {}}}",
            self.id, self.name, self.email
        )
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Require both name and email; the name is checked first.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_empty() {
            return Err(DomainError::validation(FIELD_NAME, "name is required"));
        }
        if self.email.is_empty() {
            return Err(DomainError::validation(FIELD_EMAIL, "email is required"));
        }
        Ok(())
    }

    /// Build the entity to hand to the repository
    pub fn into_user(self) -> User {
        User::new(self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("Alice", "alice@example.com");

        assert!(user.is_new());
        assert!(user.active);
        assert_eq!(user.id, UNASSIGNED_ID);
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut user = User::new("Alice", "alice@example.com");

        user.deactivate();
        assert!(!user.active);

        user.activate();
        assert!(user.active);
    }

    #[test]
    fn test_email_check_is_weak() {
        assert!(User::new("a", "a@b.com").has_valid_email());
        // Only presence of both characters is checked, not their order
        assert!(User::new("a", "a.b@c").has_valid_email());
        assert!(!User::new("a", "ab.com").has_valid_email());
        assert!(!User::new("a", "a@bcom").has_valid_email());
        assert!(!User::new("a", "").has_valid_email());
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(User::new("", "x@y.z").display_name(), "Unknown User");
        assert_eq!(User::new("Bob", "x@y.z").display_name(), "Bob");
    }

    #[test]
    fn test_display_format() {
        let mut user = User::new("Alice", "alice@example.com");
        user.id = 7;

        assert_eq!(
            user.to_string(),
            "User{ID: 7, Name: Alice, Email: alice@example.com}"
        );
    }

    #[test]
    fn test_validate_requires_name_first() {
        let err = NewUser::new("", "").validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "name", .. }));
    }

    #[test]
    fn test_validate_requires_email() {
        let err = NewUser::new("Alice", "").validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "email", .. }));
    }

    #[test]
    fn test_validate_ok() {
        assert!(NewUser::new("Alice", "a@b.com").validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip_keeps_fields() {
        let mut user = User::new("Alice", "alice@example.com");
        user.id = 3;

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back, user);
    }
}
