//! Synapse API client
//!
//! Construct a [`Client`] explicitly and pass it where it is needed; there is
//! no process-wide registry of named instances. Cloning is cheap and shares
//! the underlying connection pool, so handing clones to concurrent tasks is
//! the intended way to issue parallel calls.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::transport::{extract_list, Transport};
use crate::types::{BatchOperation, StatusSnapshot};

/// Client for the Synapse memory API
///
/// Memory, vector store, and graph operations are implemented in their own
/// modules as further `impl Client` blocks; this module holds construction
/// and the admin/composite endpoints.
#[derive(Clone)]
pub struct Client {
    pub(crate) transport: Arc<Transport>,
    pub(crate) config: Config,
}

impl Client {
    /// Create a client from explicit configuration
    pub fn new(config: Config) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self {
            transport: Arc::new(transport),
            config,
        })
    }

    /// Create a client from `SYNAPSE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the server status snapshot from `/api/status`
    pub async fn status(&self) -> Result<StatusSnapshot> {
        let value = self.transport.get("/api/status").await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch server statistics from `/api/stats`
    ///
    /// The shape of the statistics body is server-defined, so it is returned
    /// as raw JSON.
    pub async fn statistics(&self) -> Result<serde_json::Value> {
        self.transport.get("/api/stats").await
    }

    /// Check whether the server reports itself healthy
    ///
    /// Returns `Ok(false)` only when the server answered and did not claim
    /// `"healthy"`. An unreachable server is an error, not `false`; callers
    /// who want to treat the two alike can do so explicitly.
    pub async fn health_check(&self) -> Result<bool> {
        let status = self.status().await?;
        Ok(status.is_healthy())
    }

    /// Delete all server-side data
    ///
    /// The API defines no per-entity delete; this is the only removal
    /// operation.
    pub async fn clear_all(&self) -> Result<()> {
        self.transport.post_empty("/api/clear").await?;
        Ok(())
    }

    /// Execute multiple operations in one `/api/batch` request
    ///
    /// Results are positional and the batch is not atomic: a failed
    /// operation does not undo the others.
    pub async fn batch(&self, operations: Vec<BatchOperation>) -> Result<Vec<serde_json::Value>> {
        if operations.is_empty() {
            return Ok(Vec::new());
        }
        let body = serde_json::json!({ "operations": operations });
        let value = self.transport.post("/api/batch", &body).await?;
        extract_list(value, "results")
    }

    pub(crate) fn threshold_or_default(&self, threshold: Option<f32>) -> f32 {
        threshold.unwrap_or(self.config.similarity_threshold)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("authenticated", &self.config.api_key.is_some())
            .finish()
    }
}
