//! Bounded retries with exponential backoff.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// How many times to attempt an operation and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay after the first failed attempt; doubles after each further failure.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Creates a new retry policy.
    #[must_use]
    pub const fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay to wait after the failed attempt numbered `attempt` (counted from 0).
    ///
    /// `base_delay * 2^attempt`: 1s, 2s, 4s, ... with the default policy.
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(1u32 << attempt.min(16))
    }
}

/// The last error of an operation that failed on every attempt.
#[derive(Debug)]
pub struct RetryError<E> {
    /// Number of attempts performed.
    pub attempts: u32,
    /// Error of the final attempt.
    pub last: E,
}

/// Runs `op` until it succeeds or the policy's attempts are exhausted.
///
/// `op` receives the attempt number, counted from 0. Between two attempts the
/// task sleeps for [`RetryPolicy::delay_after`]; no sleep follows the last one.
///
/// # Errors
///
/// Returns the final error once every attempt has failed.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, RetryError<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) => {
                let attempts = attempt + 1;
                if attempts >= max_attempts {
                    return Err(RetryError {
                        attempts,
                        last: error,
                    });
                }

                let delay = policy.delay_after(attempt);
                warn!(
                    attempt = attempts,
                    max_attempts,
                    retry_in_secs = delay.as_secs_f64(),
                    %error,
                    "attempt failed"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
