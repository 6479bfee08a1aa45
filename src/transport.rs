//! HTTP transport for the Synapse API
//!
//! Turns a (verb, path, payload) triple into a JSON response value, with
//! bearer auth, a per-request timeout, and an optional linear-backoff retry
//! loop for transient failures. Everything above this module works in typed
//! values and never touches reqwest directly.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Result, SynapseError};

#[derive(Debug)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_retries: u32,
    retry_delay: Duration,
}

impl Transport {
    pub fn new(config: &Config) -> Result<Self> {
        // Fail on a malformed base URL at construction, not first request.
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| SynapseError::Config(format!("invalid base URL '{}': {}", config.base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SynapseError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            max_retries: config.max_retries,
            retry_delay: config.retry_delay,
        })
    }

    pub async fn get(&self, path: &str) -> Result<serde_json::Value> {
        self.request::<serde_json::Value>(Method::GET, path, None).await
    }

    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<serde_json::Value> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn post_empty(&self, path: &str) -> Result<serde_json::Value> {
        self.request::<serde_json::Value>(Method::POST, path, None).await
    }

    pub async fn patch<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<serde_json::Value> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Issue a request, retrying retryable failures up to `max_retries`
    /// times with linear backoff (attempt N sleeps N * retry_delay).
    pub async fn request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<serde_json::Value> {
        let mut attempt: u32 = 0;
        loop {
            match self.execute(method.clone(), path, body).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_retries && e.is_retryable() => {
                    attempt += 1;
                    let delay = self.retry_delay * attempt;
                    warn!(
                        %method,
                        path,
                        attempt,
                        error = %e,
                        "retrying request after {:?}",
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn execute<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<serde_json::Value> {
        let url = join_url(&self.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%method, path, status = status.as_u16(), "synapse request");

        if status == StatusCode::NOT_FOUND {
            return Err(SynapseError::NotFound(path.to_string()));
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = response.text().await.unwrap_or_default();
            return Err(SynapseError::Auth(message));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SynapseError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SynapseError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Extract the `id` key a creation endpoint must return
pub(crate) fn extract_id(value: &serde_json::Value) -> Result<String> {
    value
        .get("id")
        .and_then(|id| id.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| SynapseError::Protocol("response missing 'id'".to_string()))
}

/// Deserialize the array under `key` that a list endpoint must return
pub(crate) fn extract_list<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
    key: &str,
) -> Result<Vec<T>> {
    let items = value
        .get(key)
        .cloned()
        .ok_or_else(|| SynapseError::Protocol(format!("response missing '{}'", key)))?;
    Ok(serde_json::from_value(items)?)
}
