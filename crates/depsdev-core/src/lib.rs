//! Shared vocabulary for the deps.dev API.
//!
//! This crate holds the types any consumer of the API needs regardless of
//! transport: the [`System`] and [`HashType`] identifier enums, the request
//! key types ([`VersionKey`], [`ProjectKey`]), and the unified [`ApiError`].
//! The HTTP client lives in the `depsdev-client` crate.

pub mod error;
pub mod keys;
pub mod system;

// Re-export commonly used types
pub use error::{ApiError, Result};
pub use keys::{ProjectKey, VersionKey};
pub use system::{ContentHash, HashType, System};
