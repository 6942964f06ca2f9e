use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Package ecosystem known to deps.dev.
///
/// Serializes to the canonical uppercase identifiers the API uses in URLs
/// and request bodies (`"GO"`, `"NPM"`, ...). Parsing is case-insensitive.
///
/// Not every endpoint is available for every system; the `supports_*`
/// predicates describe the current coverage and are checked by the client
/// before a request is sent.
///
/// # Examples
///
/// ```
/// use depsdev_core::System;
///
/// let system: System = "cargo".parse().unwrap();
/// assert_eq!(system, System::Cargo);
/// assert_eq!(system.to_string(), "CARGO");
/// assert!(system.supports_dependencies());
/// assert!(!system.supports_capabilities());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum System {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "NPM")]
    Npm,
    #[serde(rename = "CARGO")]
    Cargo,
    #[serde(rename = "MAVEN")]
    Maven,
    #[serde(rename = "PYPI")]
    PyPi,
    #[serde(rename = "NUGET")]
    NuGet,
}

impl System {
    /// All systems deps.dev serves, in the order the API documents them.
    pub const ALL: [Self; 6] = [
        Self::Go,
        Self::Npm,
        Self::Cargo,
        Self::Maven,
        Self::PyPi,
        Self::NuGet,
    ];

    /// Canonical identifier used in request paths and bodies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Go => "GO",
            Self::Npm => "NPM",
            Self::Cargo => "CARGO",
            Self::Maven => "MAVEN",
            Self::PyPi => "PYPI",
            Self::NuGet => "NUGET",
        }
    }

    /// Whether the `:requirements` endpoint serves this system.
    pub const fn supports_requirements(self) -> bool {
        matches!(self, Self::Npm | Self::Maven | Self::NuGet)
    }

    /// Whether the `:dependencies` endpoint serves this system.
    pub const fn supports_dependencies(self) -> bool {
        matches!(
            self,
            Self::Go | Self::Npm | Self::Cargo | Self::Maven | Self::PyPi
        )
    }

    /// Whether the `:dependents` endpoint serves this system.
    pub const fn supports_dependents(self) -> bool {
        self.supports_dependencies()
    }

    /// Whether the `:capabilities` endpoint serves this system.
    pub const fn supports_capabilities(self) -> bool {
        matches!(self, Self::Go)
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for System {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GO" => Ok(Self::Go),
            "NPM" => Ok(Self::Npm),
            "CARGO" => Ok(Self::Cargo),
            "MAVEN" => Ok(Self::Maven),
            "PYPI" => Ok(Self::PyPi),
            "NUGET" => Ok(Self::NuGet),
            _ => Err(ApiError::UnsupportedSystem(s.to_string())),
        }
    }
}

/// Hash algorithm accepted by the `/query` endpoint.
///
/// # Examples
///
/// ```
/// use depsdev_core::HashType;
///
/// let hash: HashType = "sha256".parse().unwrap();
/// assert_eq!(hash.to_string(), "SHA256");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashType {
    #[serde(rename = "MD5")]
    Md5,
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA512")]
    Sha512,
}

impl HashType {
    /// Canonical identifier used in query parameters.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MD5" => Ok(Self::Md5),
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(ApiError::UnsupportedHash(s.to_string())),
        }
    }
}

/// Content hash of a released artifact, for querying versions by file digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentHash {
    pub hash_type: HashType,
    pub value: String,
}

impl ContentHash {
    /// Creates a content hash from an algorithm and its encoded digest.
    pub fn new(hash_type: HashType, value: impl Into<String>) -> Self {
        Self {
            hash_type,
            value: value.into(),
        }
    }
}
