use depsdev_core::{ContentHash, System, VersionKey};

/// Selector for the `/query` endpoint.
///
/// Package versions can be looked up by the content hash of a released
/// artifact, by version key fields, or both. Unset fields are omitted from
/// the query string.
///
/// # Examples
///
/// ```
/// use depsdev_client::{ContentHash, HashType, System, VersionQuery};
///
/// let by_hash = VersionQuery::by_hash(ContentHash::new(HashType::Sha256, "d7f4..."));
///
/// let by_key = VersionQuery {
///     system: Some(System::Npm),
///     name: Some("react".into()),
///     version: Some("18.2.0".into()),
///     ..VersionQuery::default()
/// };
/// # let _ = (by_hash, by_key);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VersionQuery {
    /// Content hash of a released artifact.
    pub hash: Option<ContentHash>,
    /// Ecosystem half of the version key.
    pub system: Option<System>,
    /// Package name half of the version key.
    pub name: Option<String>,
    /// Version string half of the version key.
    pub version: Option<String>,
}

impl VersionQuery {
    /// Query by artifact content hash only.
    pub fn by_hash(hash: ContentHash) -> Self {
        Self {
            hash: Some(hash),
            ..Self::default()
        }
    }

    /// Query by a full version key.
    pub fn by_version_key(key: &VersionKey) -> Self {
        Self {
            system: Some(key.system),
            name: Some(key.name.clone()),
            version: Some(key.version.clone()),
            ..Self::default()
        }
    }

    /// Flattens the selector into `/query` parameter pairs.
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(hash) = &self.hash {
            params.push(("hash.type", hash.hash_type.to_string()));
            params.push(("hash.value", hash.value.clone()));
        }
        if let Some(system) = self.system {
            params.push(("versionKey.system", system.to_string()));
        }
        if let Some(name) = &self.name {
            params.push(("versionKey.name", name.clone()));
        }
        if let Some(version) = &self.version {
            params.push(("versionKey.version", version.clone()));
        }
        params
    }
}
