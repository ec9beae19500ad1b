//! Exponential backoff for collection pages that fail with HTTP 500.
//!
//! The Datatracker occasionally answers a heavy collection query with a 500
//! that succeeds on a later attempt. The engine retries the same page after
//! 1.875 s, doubling the wait each time, and gives up once the next wait
//! would exceed 60 s:
//!
//! ```text
//! 1.875s, 3.75s, 7.5s, 15s, 30s, 60s, give up
//! ```
//!
//! ```
//! use std::time::Duration;
//! use ietfdata_core::datatracker::{BackoffPolicy, RetryDecision};
//!
//! let policy = BackoffPolicy::default();
//! match policy.should_retry(1) {
//!     RetryDecision::Retry { delay, attempt } => {
//!         assert_eq!(delay, Duration::from_millis(1875));
//!         assert_eq!(attempt, 2);
//!     }
//!     RetryDecision::DoNotRetry { reason } => panic!("{reason}"),
//! }
//! ```

use std::time::Duration;

use tracing::{debug, instrument};

/// Wait before the first retry.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(1875);

/// Longest wait the engine is prepared to make.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

const MIN_INITIAL_DELAY: Duration = Duration::from_millis(1);

/// Decision on whether to retry a failed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Retry after the specified delay.
    Retry {
        /// How long to wait before retrying.
        delay: Duration,
        /// Which attempt the retry will be (1-indexed, so the first retry is attempt 2).
        attempt: u32,
    },

    /// Give up.
    DoNotRetry {
        /// Human-readable reason.
        reason: String,
    },
}

/// Doubling backoff with a ceiling on the wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    initial_delay: Duration,
    max_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl BackoffPolicy {
    /// Creates a policy with custom delays. Mostly useful for tests.
    ///
    /// The initial delay is raised to at least one millisecond so that the
    /// doubling always reaches `max_delay` eventually.
    #[must_use]
    pub fn new(initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            initial_delay: initial_delay.max(MIN_INITIAL_DELAY),
            max_delay,
        }
    }

    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    #[must_use]
    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Wait after the `attempt`-th failure: `initial_delay * 2^(attempt - 1)`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        1_u32
            .checked_shl(attempt.saturating_sub(1))
            .and_then(|factor| self.initial_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX)
    }

    /// Decides what to do after the `attempt`-th consecutive failure of a page.
    #[instrument(skip(self), fields(max_delay_ms = self.max_delay.as_millis()))]
    pub fn should_retry(&self, attempt: u32) -> RetryDecision {
        let delay = self.delay_for(attempt);
        if delay > self.max_delay {
            debug!(attempt, delay_ms = delay.as_millis(), "backoff limit reached");
            return RetryDecision::DoNotRetry {
                reason: format!(
                    "next wait of {delay:?} exceeds the {:?} limit",
                    self.max_delay
                ),
            };
        }

        debug!(
            attempt,
            next_attempt = attempt + 1,
            delay_ms = delay.as_millis(),
            "will retry"
        );
        RetryDecision::Retry {
            delay,
            attempt: attempt + 1,
        }
    }

    /// Every wait this policy will make before giving up, in order.
    pub fn schedule(&self) -> impl Iterator<Item = Duration> + '_ {
        (1..)
            .map(|attempt| self.delay_for(attempt))
            .take_while(|delay| *delay <= self.max_delay)
    }
}
