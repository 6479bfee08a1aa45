//! Client configuration

use std::time::Duration;

/// Configuration for a Synapse [`Client`](crate::Client)
///
/// Built with chained `with_*` calls; every knob has a default matching the
/// reference deployment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server base URL, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Optional bearer token sent as `Authorization: Bearer <key>`
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Additional attempts after a retryable failure. Default 0: the API
    /// gives no idempotency guarantee, so a retried store may double-create
    /// a record. Opt in only when that is acceptable.
    pub max_retries: u32,
    /// Base delay for linear backoff (attempt N waits N * retry_delay)
    pub retry_delay: Duration,
    /// Default similarity threshold forwarded to search endpoints when the
    /// caller does not pass one
    pub similarity_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_retries: 0,
            retry_delay: Duration::from_millis(250),
            similarity_threshold: 0.7,
        }
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Create config from environment variables
    ///
    /// Reads `SYNAPSE_BASE_URL`, `SYNAPSE_API_KEY`, and
    /// `SYNAPSE_TIMEOUT_SECS`; anything unset keeps its default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("SYNAPSE_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(key) = std::env::var("SYNAPSE_API_KEY") {
            config.api_key = Some(key);
        }
        if let Some(secs) = std::env::var("SYNAPSE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }
}
