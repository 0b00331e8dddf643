use std::future::Future;
use std::time::Duration;

use crate::consts;
use crate::errors::CourseError;

/// Fixed-count, fixed-delay retry. Every failure is treated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `operation` until it succeeds or the attempts are used up.
    ///
    /// The closure receives the 1-based attempt number. The delay follows
    /// every failure, the last one included, so a request gives up after
    /// `max_attempts * delay`.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, CourseError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, CourseError>>,
    {
        for attempt in 1..=self.max_attempts {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::warn!(
                        "request attempt {}/{} failed: {}",
                        attempt,
                        self.max_attempts,
                        e
                    );
                    tokio::time::sleep(self.delay).await;
                }
            }
        }

        Err(CourseError::Unreachable {
            attempts: self.max_attempts,
        })
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(
            consts::DEFAULT_RETRY_ATTEMPTS,
            Duration::from_secs(consts::DEFAULT_RETRY_DELAY_SECS),
        )
    }
}
