use crate::system::System;
use serde::{Deserialize, Serialize};

/// Identifies one version of one package in one ecosystem.
///
/// This is the unit of lookup for the version endpoint, the `/versionbatch`
/// endpoint, and `/query` by key. Serializes with the field names the wire
/// format uses (`system`, `name`, `version`).
///
/// # Examples
///
/// ```
/// use depsdev_core::{System, VersionKey};
///
/// let key = VersionKey::new(System::Npm, "react", "18.2.0");
/// let json = serde_json::to_value(&key).unwrap();
/// assert_eq!(json["system"], "NPM");
/// assert_eq!(json["name"], "react");
/// assert_eq!(json["version"], "18.2.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionKey {
    pub system: System,
    pub name: String,
    pub version: String,
}

impl VersionKey {
    /// Creates a version key for the given package version.
    pub fn new(system: System, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            system,
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Identifies a source repository project (GitHub, GitLab, or Bitbucket).
///
/// The id is the host-qualified repo path, e.g. `github.com/serde-rs/serde`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectKey {
    pub id: String,
}

impl ProjectKey {
    /// Creates a project key from a host-qualified repo path.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
