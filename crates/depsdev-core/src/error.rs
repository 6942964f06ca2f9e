use reqwest::StatusCode;
use thiserror::Error;

/// Error type for all deps.dev API operations.
///
/// The three failure kinds a request can surface are kept distinct so
/// callers can react to each: the request never reached the server
/// (`Transport`), the server answered with a non-success status (`Status`),
/// or the body could not be decoded as JSON (`Decode`). The remaining
/// variants are argument-validation failures raised before any network
/// traffic happens.
///
/// # Examples
///
/// ```
/// use depsdev_core::ApiError;
///
/// let err = ApiError::BatchTooLarge { len: 6000, max: 5000 };
/// assert_eq!(
///     err.to_string(),
///     "batch of 6000 requests exceeds the 5000 request limit"
/// );
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}: {message}")]
    Status {
        status: StatusCode,
        url: String,
        message: String,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported packaging system: {0}")]
    UnsupportedSystem(String),

    #[error("unsupported hash algorithm: {0}")]
    UnsupportedHash(String),

    #[error("{operation} is not supported for {system}")]
    UnsupportedOperation {
        operation: &'static str,
        system: crate::System,
    },

    #[error("batch of {len} requests exceeds the {max} request limit")]
    BatchTooLarge { len: usize, max: usize },
}

impl ApiError {
    /// HTTP status code of the failed request, if one was received.
    ///
    /// `None` for transport failures and for errors raised before a request
    /// was sent.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether retrying the request could reasonably succeed.
    ///
    /// Server errors (5xx), rate limiting (429), request timeouts (408) and
    /// network-level connect/timeout failures are retryable. Client errors
    /// and decode failures are not: the same request would fail the same way.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Status { status, .. } => {
                status.is_server_error()
                    || *status == StatusCode::TOO_MANY_REQUESTS
                    || *status == StatusCode::REQUEST_TIMEOUT
            }
            _ => false,
        }
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
