//! Batch lookup envelopes and pagination.
//!
//! The batch endpoints (`/versionbatch`, `/projectbatch`, `/purlbatch`)
//! accept up to [`MAX_BATCH_SIZE`] requests per call and page their results
//! through an opaque `nextPageToken`. The per-request responses stay
//! untyped JSON, like every other endpoint.

use crate::client::DepsDev;
use depsdev_core::{ApiError, ProjectKey, Result, VersionKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of requests a single batch call accepts.
pub const MAX_BATCH_SIZE: usize = 5000;

/// One page of a batched lookup.
///
/// # Examples
///
/// ```
/// use depsdev_client::BatchPage;
///
/// let page: BatchPage =
///     serde_json::from_str(r#"{"responses":[{"ok":1}],"nextPageToken":"tok"}"#).unwrap();
/// assert_eq!(page.responses.len(), 1);
/// assert_eq!(page.next_page_token.as_deref(), Some("tok"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPage {
    /// One response per request, in request order.
    #[serde(default)]
    pub responses: Vec<Value>,
    /// Continuation token, absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchBody<T> {
    requests: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionKeyEntry<'a> {
    version_key: &'a VersionKey,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectKeyEntry<'a> {
    project_key: &'a ProjectKey,
}

#[derive(Serialize)]
struct PurlEntry<'a> {
    purl: &'a str,
}

fn check_batch_len(len: usize) -> Result<()> {
    if len > MAX_BATCH_SIZE {
        return Err(ApiError::BatchTooLarge {
            len,
            max: MAX_BATCH_SIZE,
        });
    }
    Ok(())
}

impl DepsDev {
    /// Looks up one page of version metadata for up to [`MAX_BATCH_SIZE`]
    /// version keys.
    ///
    /// Pass the `next_page_token` of the previous page to resume; an empty
    /// key slice returns an empty page without touching the network.
    ///
    /// # Errors
    ///
    /// [`ApiError::BatchTooLarge`] when more than [`MAX_BATCH_SIZE`] keys
    /// are given, otherwise the usual request failures.
    pub async fn get_version_batch(
        &self,
        keys: &[VersionKey],
        page_token: Option<&str>,
    ) -> Result<BatchPage> {
        check_batch_len(keys.len())?;
        if keys.is_empty() {
            return Ok(BatchPage::default());
        }

        let body = BatchBody {
            requests: keys
                .iter()
                .map(|key| VersionKeyEntry { version_key: key })
                .collect(),
            page_token: page_token.map(str::to_owned),
        };
        self.post_page(&format!("{}/versionbatch", self.base_url()), &body)
            .await
    }

    /// Collects every page of [`get_version_batch`](Self::get_version_batch)
    /// into one response list, in page order.
    pub async fn get_all_versions_batch(&self, keys: &[VersionKey]) -> Result<Vec<Value>> {
        let mut responses = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page = self.get_version_batch(keys, token.as_deref()).await?;
            responses.extend(page.responses);
            match page.next_page_token {
                Some(next) => token = Some(next),
                None => return Ok(responses),
            }
        }
    }

    /// Looks up one page of project metadata for up to [`MAX_BATCH_SIZE`]
    /// project keys.
    ///
    /// Same paging and limit contract as
    /// [`get_version_batch`](Self::get_version_batch).
    pub async fn get_project_batch(
        &self,
        keys: &[ProjectKey],
        page_token: Option<&str>,
    ) -> Result<BatchPage> {
        check_batch_len(keys.len())?;
        if keys.is_empty() {
            return Ok(BatchPage::default());
        }

        let body = BatchBody {
            requests: keys
                .iter()
                .map(|key| ProjectKeyEntry { project_key: key })
                .collect(),
            page_token: page_token.map(str::to_owned),
        };
        self.post_page(&format!("{}/projectbatch", self.base_url()), &body)
            .await
    }

    /// Collects every page of [`get_project_batch`](Self::get_project_batch)
    /// into one response list, in page order.
    pub async fn get_all_projects_batch(&self, keys: &[ProjectKey]) -> Result<Vec<Value>> {
        let mut responses = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page = self.get_project_batch(keys, token.as_deref()).await?;
            responses.extend(page.responses);
            match page.next_page_token {
                Some(next) => token = Some(next),
                None => return Ok(responses),
            }
        }
    }

    /// Resolves one page of purl lookups for up to [`MAX_BATCH_SIZE`] purls.
    ///
    /// Same paging and limit contract as
    /// [`get_version_batch`](Self::get_version_batch).
    pub async fn get_purl_lookup_batch<S: AsRef<str>>(
        &self,
        purls: &[S],
        page_token: Option<&str>,
    ) -> Result<BatchPage> {
        check_batch_len(purls.len())?;
        if purls.is_empty() {
            return Ok(BatchPage::default());
        }

        let body = BatchBody {
            requests: purls
                .iter()
                .map(|purl| PurlEntry {
                    purl: purl.as_ref(),
                })
                .collect(),
            page_token: page_token.map(str::to_owned),
        };
        self.post_page(&format!("{}/purlbatch", self.base_url()), &body)
            .await
    }

    /// Collects every page of
    /// [`get_purl_lookup_batch`](Self::get_purl_lookup_batch) into one
    /// response list, in page order.
    pub async fn get_all_purl_lookups_batch<S: AsRef<str>>(
        &self,
        purls: &[S],
    ) -> Result<Vec<Value>> {
        let mut responses = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page = self.get_purl_lookup_batch(purls, token.as_deref()).await?;
            responses.extend(page.responses);
            match page.next_page_token {
                Some(next) => token = Some(next),
                None => return Ok(responses),
            }
        }
    }

    async fn post_page<B: Serialize>(&self, url: &str, body: &B) -> Result<BatchPage> {
        let value = self.transport().post_json(url, body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depsdev_core::System;
    use serde_json::json;

    #[test]
    fn test_version_batch_body_wire_format() {
        let keys = vec![VersionKey::new(System::Npm, "react", "18.2.0")];
        let body = BatchBody {
            requests: keys
                .iter()
                .map(|key| VersionKeyEntry { version_key: key })
                .collect(),
            page_token: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "requests": [
                    {"versionKey": {"system": "NPM", "name": "react", "version": "18.2.0"}}
                ]
            })
        );
    }

    #[test]
    fn test_page_token_serialized_only_when_present() {
        let body = BatchBody::<PurlEntry<'_>> {
            requests: vec![PurlEntry { purl: "pkg:npm/react@18.2.0" }],
            page_token: Some("tok".into()),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "requests": [{"purl": "pkg:npm/react@18.2.0"}],
                "pageToken": "tok"
            })
        );
    }

    #[test]
    fn test_project_batch_body_wire_format() {
        let keys = vec![ProjectKey::new("github.com/serde-rs/serde")];
        let body = BatchBody {
            requests: keys
                .iter()
                .map(|key| ProjectKeyEntry { project_key: key })
                .collect(),
            page_token: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "requests": [{"projectKey": {"id": "github.com/serde-rs/serde"}}]
            })
        );
    }

    #[test]
    fn test_batch_page_defaults() {
        let page: BatchPage = serde_json::from_str("{}").unwrap();
        assert!(page.responses.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_check_batch_len() {
        assert!(check_batch_len(MAX_BATCH_SIZE).is_ok());
        let error = check_batch_len(MAX_BATCH_SIZE + 1).unwrap_err();
        assert!(matches!(error, ApiError::BatchTooLarge { len: 5001, .. }));
    }
}
