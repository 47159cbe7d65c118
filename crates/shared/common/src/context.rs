//! Per-call context passed to every store and service operation.
//!
//! Carries a request id for log correlation and an optional cancellation
//! signal. In-memory operations finish in a bounded critical section and do
//! not observe the signal.

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Call context with an optional cancellation signal.
#[derive(Debug, Clone)]
pub struct Context {
    request_id: Uuid,
    cancellation: Option<CancellationToken>,
}

impl Context {
    /// Fresh context with a new request id and no cancellation signal
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            cancellation: None,
        }
    }

    /// Fresh context bound to the given cancellation token
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            cancellation: Some(token),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Check if the caller has cancelled; false when no token is attached
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_not_cancellable() {
        let ctx = Context::default();

        assert!(ctx.cancellation().is_none());
        assert!(!ctx.is_cancelled());
    }

    #[test]
    fn test_cancellation_is_visible() {
        let token = CancellationToken::new();
        let ctx = Context::with_cancellation(token.clone());

        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn test_request_ids_differ() {
        assert_ne!(Context::new().request_id(), Context::new().request_id());
    }
}
