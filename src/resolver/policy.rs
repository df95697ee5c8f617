//! Retry budget and backoff schedule

use std::time::Duration;

/// Default retry budget (retries after the initial query)
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default base backoff in seconds
pub const DEFAULT_BASE_DELAY_SECS: u64 = 5;

/// Retry policy for mergeability resolution
///
/// With the defaults (5 retries, 5s base) the worst-case wait is
/// 5 + 10 + 20 + 40 + 80 = 155 seconds across 6 queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries allowed after the initial query
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent retry
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_secs(DEFAULT_BASE_DELAY_SECS),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with an explicit budget and base delay
    pub const fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Delay before retry `k` (1-indexed): `base * 2^(k-1)`, saturating
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay.saturating_mul(factor)
    }

    /// Total queries issued in the worst case (initial query plus retries)
    pub const fn max_queries(&self) -> u32 {
        self.max_retries + 1
    }

    /// Sum of all backoff delays if every retry is spent
    pub fn max_total_delay(&self) -> Duration {
        (1..=self.max_retries)
            .map(|k| self.delay_for(k))
            .sum()
    }
}

/// Mutable counters for one resolution, passed by value through the loop
///
/// Owned exclusively by a single `resolve_merge_commit` invocation and
/// discarded when it returns; nothing survives across resolutions.
#[derive(Debug, Clone, Copy)]
pub(super) struct RetryState {
    /// Retries left before the resolution times out
    pub attempts_remaining: u32,
    /// Delay to wait before the next retry
    pub backoff: Duration,
}

impl RetryState {
    /// Initial state for a policy: full budget, base backoff
    pub fn initial(policy: &RetryPolicy) -> Self {
        Self {
            attempts_remaining: policy.max_retries,
            backoff: policy.base_delay,
        }
    }

    /// State after spending one retry: one fewer attempt, doubled backoff
    pub fn after_retry(self) -> Self {
        Self {
            attempts_remaining: self.attempts_remaining.saturating_sub(1),
            backoff: self.backoff.saturating_mul(2),
        }
    }
}
