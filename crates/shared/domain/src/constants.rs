//! Domain-level constants.
//!
//! These constants define identifier policy and display rules.

use crate::user::UserId;

// =============================================================================
// Identifiers
// =============================================================================

/// Sentinel id meaning "not yet assigned by the repository"
pub const UNASSIGNED_ID: UserId = 0;

/// First id handed out by a fresh repository
pub const FIRST_USER_ID: UserId = 1;

// =============================================================================
// Display
// =============================================================================

/// Display name used when a user has an empty name
pub const UNKNOWN_USER_DISPLAY_NAME: &str = "Unknown User";

// =============================================================================
// Validation
// =============================================================================

/// Field name reported when the user name is missing
pub const FIELD_NAME: &str = "name";

/// Field name reported when the email is missing
pub const FIELD_EMAIL: &str = "email";
