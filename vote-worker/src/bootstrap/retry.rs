//! Reusable fixed-cadence retry for waiting out external dependencies.
use std::time::Duration;

use tokio_retry::strategy::FixedInterval;
use tokio_retry::{Action, Condition, RetryIf};

/// Retry policy with a fixed pause between attempts.
///
/// Unbounded by default: the caller blocks until the operation succeeds or
/// returns an error the condition refuses to retry. `limit` caps the number
/// of retries for callers that need an upper bound.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    interval: Duration,
    max_retries: Option<usize>,
}

impl RetryPolicy {
    /// Creates a policy retrying every `interval`, forever.
    pub fn fixed(interval: Duration) -> Self {
        Self {
            interval,
            max_retries: None,
        }
    }

    /// Caps the number of retries after the initial attempt.
    pub fn limit(mut self, max_retries: usize) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Runs `action`, retrying while `condition` accepts the error.
    ///
    /// # Arguments
    ///
    /// * `action` - The fallible operation to run.
    /// * `condition` - Decides per error whether another attempt is worth
    ///   making; a rejected error is returned to the caller as-is.
    ///
    /// # Returns
    ///
    /// The first success, or the first error that is not retried (because
    /// the condition rejected it or the retry budget ran out).
    pub async fn run<A, C>(&self, action: A, condition: C) -> Result<A::Item, A::Error>
    where
        A: Action,
        C: Condition<A::Error>,
    {
        let strategy = FixedInterval::new(self.interval);
        match self.max_retries {
            Some(max_retries) => RetryIf::spawn(strategy.take(max_retries), action, condition).await,
            None => RetryIf::spawn(strategy, action, condition).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let attempts = AtomicUsize::new(0);

        let result: Result<usize, &str> = RetryPolicy::fixed(Duration::from_millis(5))
            .run(
                || {
                    let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                    async move {
                        if attempt < 3 {
                            Err("not ready")
                        } else {
                            Ok(attempt)
                        }
                    }
                },
                |_: &&str| true,
            )
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_rejected_error_propagates_without_retry() {
        let attempts = AtomicUsize::new(0);

        let result: Result<(), &str> = RetryPolicy::fixed(Duration::from_millis(5))
            .run(
                || {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    async { Err::<(), _>("fatal") }
                },
                |err: &&str| *err != "fatal",
            )
            .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_bounded_policy_exhausts_retry_budget() {
        let attempts = AtomicUsize::new(0);

        let result: Result<(), &str> = RetryPolicy::fixed(Duration::from_millis(1))
            .limit(2)
            .run(
                || {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    async { Err::<(), _>("still down") }
                },
                |_: &&str| true,
            )
            .await;

        assert!(result.is_err());
        // Initial attempt plus the two allowed retries.
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }
}
