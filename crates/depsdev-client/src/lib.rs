//! Asynchronous client for the [deps.dev](https://deps.dev) API.
//!
//! deps.dev serves metadata about open source packages: versions,
//! dependency graphs, advisories, source projects, and cross-ecosystem
//! lookups by purl or artifact hash. This crate maps each REST endpoint to
//! one async method on [`DepsDev`] and returns the response body as
//! deserialized JSON - the response shapes are owned and documented by the
//! service, so they are not remodeled here.
//!
//! Failed requests surface as [`ApiError`], with transport failures,
//! non-success statuses, and decode failures kept distinct. Server errors
//! and network failures are retried with exponential backoff
//! ([`RetryConfig`]); client errors fail fast.
//!
//! # Examples
//!
//! ```no_run
//! use depsdev_client::{DepsDev, System, VersionKey};
//!
//! # #[tokio::main]
//! # async fn main() -> depsdev_client::Result<()> {
//! let client = DepsDev::new();
//!
//! // Single lookups
//! let version = client.get_version(System::Cargo, "serde", "1.0.219").await?;
//! println!("licenses: {}", version["licenses"]);
//!
//! // Batched lookups page transparently
//! let keys = vec![
//!     VersionKey::new(System::Npm, "react", "18.2.0"),
//!     VersionKey::new(System::Npm, "left-pad", "1.3.0"),
//! ];
//! let responses = client.get_all_versions_batch(&keys).await?;
//! assert_eq!(responses.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod client;
pub mod config;
mod http;
pub mod query;
pub mod retry;

// Re-export the client surface
pub use batch::{BatchPage, MAX_BATCH_SIZE};
pub use client::DepsDev;
pub use config::{BASE_URL, ClientConfig};
pub use query::VersionQuery;
pub use retry::RetryConfig;

// Re-export the shared vocabulary so callers need only one crate
pub use depsdev_core::{
    ApiError, ContentHash, HashType, ProjectKey, Result, System, VersionKey,
};
