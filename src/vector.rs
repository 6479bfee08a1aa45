//! Vector store operations
//!
//! Remote storage and similarity search over the `/api/vector` namespace.
//! For local, no-round-trip vector math see [`crate::vecmath`].

use std::collections::HashMap;

use crate::client::Client;
use crate::error::Result;
use crate::transport::{extract_id, extract_list};
use crate::types::{now_millis, SearchResult, VectorEntry};

impl Client {
    /// Store a raw vector for server-side similarity search
    pub async fn store_vector(
        &self,
        vector: Vec<f32>,
        metadata: Option<HashMap<String, serde_json::Value>>,
    ) -> Result<String> {
        let entry = VectorEntry {
            id: None,
            vector,
            metadata: metadata.unwrap_or_default(),
            timestamp: now_millis(),
        };
        let value = self.transport.post("/api/vector", &entry).await?;
        extract_id(&value)
    }

    /// Find stored vectors similar to `vector`
    ///
    /// Dimensionality is only validated server-side at comparison time; the
    /// threshold defaults to the configured similarity threshold.
    pub async fn search_vectors(
        &self,
        vector: &[f32],
        limit: usize,
        threshold: Option<f32>,
    ) -> Result<Vec<SearchResult>> {
        let body = serde_json::json!({
            "vector": vector,
            "limit": limit,
            "threshold": self.threshold_or_default(threshold),
        });
        let value = self.transport.post("/api/vector/search", &body).await?;
        extract_list(value, "results")
    }
}
