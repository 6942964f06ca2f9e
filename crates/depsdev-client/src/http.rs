use crate::config::ClientConfig;
use crate::retry::RetryConfig;
use depsdev_core::{ApiError, Result};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// HTTP transport shared by all endpoint methods.
///
/// Owns the reqwest connection pool and drives the retry loop: one request
/// per attempt, backoff between retryable failures, everything else
/// propagated to the caller unchanged.
pub(crate) struct Transport {
    client: Client,
    retry: RetryConfig,
}

impl Transport {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            retry: config.retry.clone(),
        }
    }

    /// GET `url` and decode the JSON body. `query` pairs are appended to
    /// the URL; an empty slice leaves it untouched.
    pub(crate) async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        self.request_with_retry(url, || {
            let mut request = self.client.get(url);
            if !query.is_empty() {
                request = request.query(query);
            }
            request
        })
        .await
    }

    /// POST `body` as JSON to `url` and decode the JSON response.
    pub(crate) async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<Value> {
        self.request_with_retry(url, || self.client.post(url).json(body))
            .await
    }

    async fn request_with_retry<F>(&self, url: &str, build: F) -> Result<Value>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt: u32 = 0;

        loop {
            tracing::debug!(
                "requesting {} (attempt {}/{})",
                url,
                attempt + 1,
                self.retry.max_retries + 1
            );

            match execute(build(), url).await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_retryable() && attempt < self.retry.max_retries => {
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(
                        "request to {} failed: {}, retrying in {:?}",
                        url,
                        error,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

/// Performs a single attempt: send, check status, decode.
async fn execute(request: RequestBuilder, url: &str) -> Result<Value> {
    let response = request.send().await.map_err(|e| ApiError::Transport {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status,
            url: url.to_string(),
            message,
        });
    }

    let body = response.bytes().await.map_err(|e| ApiError::Transport {
        url: url.to_string(),
        source: e,
    })?;

    serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        source: e,
    })
}
