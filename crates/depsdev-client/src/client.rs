use crate::config::ClientConfig;
use crate::http::Transport;
use crate::query::VersionQuery;
use depsdev_core::{ApiError, Result, System};
use serde_json::Value;
use urlencoding::encode;

/// Asynchronous client for the deps.dev API.
///
/// One method per REST endpoint. Responses come back as deserialized JSON
/// ([`serde_json::Value`]) exactly as the service sent them; the response
/// shapes are documented by deps.dev, not remodeled here.
///
/// The client owns a connection pool and is cheap to share behind an `Arc`
/// if multiple tasks need it. Dropping the client releases the pool.
///
/// # Examples
///
/// ```no_run
/// use depsdev_client::{DepsDev, System};
///
/// # #[tokio::main]
/// # async fn main() -> depsdev_client::Result<()> {
/// let client = DepsDev::new();
///
/// let package = client.get_package(System::Npm, "react").await?;
/// println!("known versions: {}", package["versions"]);
/// # Ok(())
/// # }
/// ```
pub struct DepsDev {
    transport: Transport,
    base_url: String,
}

impl DepsDev {
    /// Creates a client for the production API with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// Every request issued by the returned client uses the configured
    /// base URL, timeout, user agent, and retry policy.
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            transport: Transport::new(&config),
            base_url,
        }
    }

    /// Base URL this client issues requests against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Fetches basic information about a package, including its known
    /// versions.
    ///
    /// # Errors
    ///
    /// [`ApiError::Status`] with 404 when the package is unknown, plus the
    /// usual transport and decode failures.
    pub async fn get_package(&self, system: System, name: &str) -> Result<Value> {
        let url = format!(
            "{}/systems/{}/packages/{}",
            self.base_url,
            system,
            encode(name)
        );
        self.transport.get_json(&url, &[]).await
    }

    /// Fetches detailed information about a single package version.
    pub async fn get_version(&self, system: System, name: &str, version: &str) -> Result<Value> {
        let url = format!(
            "{}/systems/{}/packages/{}/versions/{}",
            self.base_url,
            system,
            encode(name),
            encode(version)
        );
        self.transport.get_json(&url, &[]).await
    }

    /// Fetches the declared requirements for a package version.
    ///
    /// Available for NPM, NUGET, and MAVEN.
    pub async fn get_requirements(
        &self,
        system: System,
        name: &str,
        version: &str,
    ) -> Result<Value> {
        if !system.supports_requirements() {
            return Err(ApiError::UnsupportedOperation {
                operation: "requirements",
                system,
            });
        }
        let url = format!(
            "{}/systems/{}/packages/{}/versions/{}:requirements",
            self.base_url,
            system,
            encode(name),
            encode(version)
        );
        self.transport.get_json(&url, &[]).await
    }

    /// Fetches the resolved dependency graph of a package version.
    ///
    /// Available for GO, NPM, CARGO, MAVEN, and PYPI.
    pub async fn get_dependencies(
        &self,
        system: System,
        name: &str,
        version: &str,
    ) -> Result<Value> {
        if !system.supports_dependencies() {
            return Err(ApiError::UnsupportedOperation {
                operation: "dependencies",
                system,
            });
        }
        let url = format!(
            "{}/systems/{}/packages/{}/versions/{}:dependencies",
            self.base_url,
            system,
            encode(name),
            encode(version)
        );
        self.transport.get_json(&url, &[]).await
    }

    /// Fetches counts of the packages that depend on a package version.
    ///
    /// Available for GO, NPM, CARGO, MAVEN, and PYPI.
    pub async fn get_dependents(
        &self,
        system: System,
        name: &str,
        version: &str,
    ) -> Result<Value> {
        if !system.supports_dependents() {
            return Err(ApiError::UnsupportedOperation {
                operation: "dependents",
                system,
            });
        }
        let url = format!(
            "{}/systems/{}/packages/{}/versions/{}:dependents",
            self.base_url,
            system,
            encode(name),
            encode(version)
        );
        self.transport.get_json(&url, &[]).await
    }

    /// Fetches capability calls made by a package version.
    ///
    /// Available for GO only.
    pub async fn get_capabilities(
        &self,
        system: System,
        name: &str,
        version: &str,
    ) -> Result<Value> {
        if !system.supports_capabilities() {
            return Err(ApiError::UnsupportedOperation {
                operation: "capabilities",
                system,
            });
        }
        let url = format!(
            "{}/systems/{}/packages/{}/versions/{}:capabilities",
            self.base_url,
            system,
            encode(name),
            encode(version)
        );
        self.transport.get_json(&url, &[]).await
    }

    /// Fetches packages whose names are suspiciously close to the given
    /// one (typosquatting candidates).
    pub async fn get_similarly_named_packages(
        &self,
        system: System,
        name: &str,
    ) -> Result<Value> {
        let url = format!(
            "{}/systems/{}/packages/{}:similarlyNamedPackages",
            self.base_url,
            system,
            encode(name)
        );
        self.transport.get_json(&url, &[]).await
    }

    /// Fetches metadata about a source repository project.
    ///
    /// `id` is the host-qualified repo path, e.g. `github.com/serde-rs/serde`.
    pub async fn get_project(&self, id: &str) -> Result<Value> {
        let url = format!("{}/projects/{}", self.base_url, encode(id));
        self.transport.get_json(&url, &[]).await
    }

    /// Fetches the package versions deps.dev has attributed to a source
    /// repository project.
    pub async fn get_project_package_versions(&self, id: &str) -> Result<Value> {
        let url = format!(
            "{}/projects/{}:packageversions",
            self.base_url,
            encode(id)
        );
        self.transport.get_json(&url, &[]).await
    }

    /// Fetches a security advisory by OSV identifier.
    pub async fn get_advisory(&self, id: &str) -> Result<Value> {
        let url = format!("{}/advisories/{}", self.base_url, encode(id));
        self.transport.get_json(&url, &[]).await
    }

    /// Resolves a package URL (purl) to the package or version it names.
    pub async fn get_purl_lookup(&self, purl: &str) -> Result<Value> {
        let url = format!("{}/purl/{}", self.base_url, encode(purl));
        self.transport.get_json(&url, &[]).await
    }

    /// Queries package versions by artifact content hash and/or version
    /// key fields.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use depsdev_client::{ContentHash, DepsDev, HashType, VersionQuery};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> depsdev_client::Result<()> {
    /// let client = DepsDev::new();
    /// let query = VersionQuery::by_hash(ContentHash::new(HashType::Sha256, "d7f4..."));
    /// let matches = client.query_package_versions(&query).await?;
    /// # let _ = matches;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query_package_versions(&self, query: &VersionQuery) -> Result<Value> {
        let url = format!("{}/query", self.base_url);
        self.transport.get_json(&url, &query.to_params()).await
    }

    /// Fetches the container image repositories matching an image chain ID.
    pub async fn query_container_images(&self, chain_id: &str) -> Result<Value> {
        let url = format!(
            "{}/querycontainerimages/{}",
            self.base_url,
            encode(chain_id)
        );
        self.transport.get_json(&url, &[]).await
    }
}

impl Default for DepsDev {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client(server: &mockito::Server) -> DepsDev {
        DepsDev::with_config(ClientConfig {
            base_url: server.url(),
            ..ClientConfig::default()
        })
    }

    #[tokio::test]
    async fn test_get_package_builds_expected_path() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/systems/NPM/packages/react")
            .with_status(200)
            .with_body(r#"{"packageKey":{"system":"NPM","name":"react"}}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let package = client.get_package(System::Npm, "react").await.unwrap();

        assert_eq!(package["packageKey"]["name"], "react");
    }

    #[tokio::test]
    async fn test_scoped_package_names_are_percent_encoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/systems/NPM/packages/%40colors%2Fcolors")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = test_client(&server);
        client
            .get_package(System::Npm, "@colors/colors")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_version_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/systems/PYPI/packages/requests/versions/2.31.0")
            .with_status(200)
            .with_body(r#"{"isDefault":true}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let version = client
            .get_version(System::PyPi, "requests", "2.31.0")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(version, json!({"isDefault": true}));
    }

    #[tokio::test]
    async fn test_requirements_rejects_unsupported_system() {
        let server = mockito::Server::new_async().await;
        let client = test_client(&server);

        let error = client
            .get_requirements(System::Cargo, "serde", "1.0.0")
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "requirements is not supported for CARGO"
        );
    }

    #[tokio::test]
    async fn test_dependencies_rejects_nuget() {
        let server = mockito::Server::new_async().await;
        let client = test_client(&server);

        let error = client
            .get_dependencies(System::NuGet, "Newtonsoft.Json", "13.0.3")
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::UnsupportedOperation { .. }));
    }

    #[tokio::test]
    async fn test_capabilities_accepts_go() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/systems/GO/packages/golang.org%2Fx%2Ftext/versions/v0.14.0:capabilities",
            )
            .with_status(200)
            .with_body(r#"{"capabilities":[]}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        client
            .get_capabilities(System::Go, "golang.org/x/text", "v0.14.0")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_project_encodes_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects/github.com%2Fserde-rs%2Fserde")
            .with_status(200)
            .with_body(r#"{"projectKey":{"id":"github.com/serde-rs/serde"}}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        client.get_project("github.com/serde-rs/serde").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_advisory_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/advisories/GHSA-jfh8-c2jp-5v3q")
            .with_status(200)
            .with_body(r#"{"advisoryKey":{"id":"GHSA-jfh8-c2jp-5v3q"}}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let advisory = client.get_advisory("GHSA-jfh8-c2jp-5v3q").await.unwrap();

        mock.assert_async().await;
        assert_eq!(advisory["advisoryKey"]["id"], "GHSA-jfh8-c2jp-5v3q");
    }

    #[tokio::test]
    async fn test_query_by_version_key_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/query")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("versionKey.system".into(), "NPM".into()),
                mockito::Matcher::UrlEncoded("versionKey.name".into(), "react".into()),
                mockito::Matcher::UrlEncoded("versionKey.version".into(), "18.2.0".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"results":[]}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let query = VersionQuery {
            system: Some(System::Npm),
            name: Some("react".into()),
            version: Some("18.2.0".into()),
            ..VersionQuery::default()
        };
        client.query_package_versions(&query).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_purl_lookup_encodes_purl() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/purl/pkg%3Anpm%2Freact%4018.2.0")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = test_client(&server);
        client.get_purl_lookup("pkg:npm/react@18.2.0").await.unwrap();

        mock.assert_async().await;
    }

    #[test]
    fn test_trailing_slash_is_trimmed_from_base_url() {
        let client = DepsDev::with_config(ClientConfig {
            base_url: "https://api.deps.dev/v3alpha/".into(),
            ..ClientConfig::default()
        });
        assert_eq!(client.base_url(), "https://api.deps.dev/v3alpha");
    }
}
