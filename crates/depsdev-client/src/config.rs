use crate::retry::RetryConfig;
use std::time::Duration;

/// Production deps.dev API endpoint.
pub const BASE_URL: &str = "https://api.deps.dev/v3alpha";

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("depsdev-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`DepsDev`](crate::DepsDev).
///
/// All requests issued by a client built from this configuration use its
/// base URL, timeout, user agent, and retry policy.
///
/// # Defaults
///
/// - `base_url`: the production API ([`BASE_URL`])
/// - `timeout`: 30 seconds per request
/// - `user_agent`: `depsdev-client/<version>`
/// - `retry`: [`RetryConfig::default`]
///
/// # Examples
///
/// ```
/// use depsdev_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig {
///     timeout: Duration::from_secs(5),
///     ..ClientConfig::default()
/// };
///
/// assert_eq!(config.base_url, "https://api.deps.dev/v3alpha");
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL requests are issued against.
    pub base_url: String,
    /// Per-request timeout, covering connect through body read.
    pub timeout: Duration,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
    /// Retry policy for retryable failures.
    pub retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryConfig::default(),
        }
    }
}
