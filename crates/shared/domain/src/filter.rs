//! Composable AND-predicate over user fields.

use serde::{Deserialize, Serialize};

use crate::user::{User, UserId};

/// Filter over users. Every criterion is optional; set criteria are ANDed.
///
/// The default filter matches every user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFilter {
    /// Required `active` flag, if any
    pub active: Option<bool>,
    /// Inclusive lower id bound
    pub min_id: Option<UserId>,
    /// Inclusive upper id bound
    pub max_id: Option<UserId>,
    /// Case-sensitive substring of the name; empty means "don't care"
    pub name_like: String,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn min_id(mut self, id: UserId) -> Self {
        self.min_id = Some(id);
        self
    }

    pub fn max_id(mut self, id: UserId) -> Self {
        self.max_id = Some(id);
        self
    }

    pub fn name_like(mut self, fragment: impl Into<String>) -> Self {
        self.name_like = fragment.into();
        self
    }

    /// Check if no criterion is set
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
            && self.min_id.is_none()
            && self.max_id.is_none()
            && self.name_like.is_empty()
    }

    /// Evaluate the filter against a user. Pure; safe to call from any thread.
    pub fn matches(&self, user: &User) -> bool {
        if self.active.is_some_and(|active| user.active != active) {
            return false;
        }
        if self.min_id.is_some_and(|min| user.id < min) {
            return false;
        }
        if self.max_id.is_some_and(|max| user.id > max) {
            return false;
        }
        if !self.name_like.is_empty() && !user.name.contains(self.name_like.as_str()) {
            return false;
        }
        true
    }
}
