use std::time::Duration;

/// Retry policy for requests that fail with a retryable error.
///
/// Delays grow geometrically: retry `n` waits
/// `initial_delay_ms * backoff_multiplier^n` milliseconds, capped at
/// `max_delay_ms`. Which failures count as retryable is decided by
/// [`ApiError::is_retryable`](depsdev_core::ApiError::is_retryable) -
/// server errors and network failures retry, client errors fail fast.
///
/// # Examples
///
/// ```
/// use depsdev_client::RetryConfig;
/// use std::time::Duration;
///
/// let retry = RetryConfig::default();
/// assert_eq!(retry.delay_for(0), Duration::from_millis(500));
/// assert_eq!(retry.delay_for(1), Duration::from_millis(1000));
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the initial attempt. Zero disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay_ms: u64,
    /// Upper bound on any single delay.
    pub max_delay_ms: u64,
    /// Growth factor applied per retry.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 500,
            max_delay_ms: 16_000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Disables retrying; every failure propagates immediately.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay to wait before retry number `attempt` (zero-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self.backoff_multiplier.powi(attempt.min(i32::MAX as u32) as i32);
        let delay_ms = (self.initial_delay_ms as f64 * factor) as u64;
        Duration::from_millis(delay_ms.min(self.max_delay_ms))
    }
}
