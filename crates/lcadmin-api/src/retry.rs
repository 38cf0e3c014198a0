// Retry policy for read paths.
//
// One policy object is shared by every GET helper on the client instead
// of per-endpoint predicates. Mutations never consult it -- a POST that
// failed must not be replayed.

use std::time::Duration;

use crate::error::Error;

/// Configurable retry policy for idempotent requests.
///
/// A request is retried while the error is classified retryable
/// ([`Error::is_retryable`]: transport-level failure, or HTTP status
/// outside `400..500`) and fewer than `max_attempts` attempts have run.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first (so 3 means two retries).
    pub max_attempts: u32,
    /// Delay before the first retry; doubles per subsequent attempt.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(250),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries (used by tests and one-shot probes).
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
        }
    }

    /// Whether `attempt` (1-based) should be retried after `err`.
    pub fn should_retry(&self, err: &Error, attempt: u32) -> bool {
        attempt < self.max_attempts && err.is_retryable()
    }

    /// Backoff delay before retrying after `attempt` (1-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_error(status: u16) -> Error {
        Error::Request {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn server_errors_retry_up_to_the_cap() {
        let policy = RetryPolicy::default();
        let err = request_error(500);
        assert!(policy.should_retry(&err, 1));
        assert!(policy.should_retry(&err, 2));
        assert!(!policy.should_retry(&err, 3));
    }

    #[test]
    fn client_errors_never_retry() {
        let policy = RetryPolicy::default();
        for status in [400, 404, 409, 422] {
            assert!(!policy.should_retry(&request_error(status), 1));
        }
    }

    #[test]
    fn operation_failures_never_retry() {
        // A well-formed 200 with a bad envelope will not improve on replay.
        assert!(!RetryPolicy::default().should_retry(&Error::Operation, 1));
    }

    #[test]
    fn timeouts_retry() {
        let err = Error::Timeout { timeout_secs: 30 };
        assert!(RetryPolicy::default().should_retry(&err, 1));
    }

    #[test]
    fn backoff_doubles() {
        let policy = RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
        };
        assert_eq!(policy.delay(1), Duration::from_millis(100));
        assert_eq!(policy.delay(2), Duration::from_millis(200));
        assert_eq!(policy.delay(3), Duration::from_millis(400));
    }

    #[test]
    fn none_policy_is_single_shot() {
        assert!(!RetryPolicy::none().should_retry(&request_error(500), 1));
    }
}
