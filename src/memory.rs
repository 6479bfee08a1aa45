//! Memory record operations
//!
//! One-to-one proxies over the transport for the `/api/memory` endpoints.
//! Every call returns a typed `Result`; 404 on fetch is the one deliberate
//! exception, surfaced as `Ok(None)` because a missing record is an answer,
//! not a failure.

use std::collections::HashMap;

use futures::future::try_join_all;

use crate::client::Client;
use crate::error::{Result, SynapseError};
use crate::transport::{extract_id, extract_list};
use crate::types::{MemoryRecord, MemoryType, SearchResult};

impl Client {
    /// Store a memory record, returning the server-assigned id
    ///
    /// The record is submitted with strength 1.0, an empty connection set,
    /// and a client-side timestamp taken at submission.
    pub async fn store(
        &self,
        content: serde_json::Value,
        memory_type: MemoryType,
        metadata: Option<HashMap<String, serde_json::Value>>,
    ) -> Result<String> {
        let record = MemoryRecord::new(content, memory_type)
            .with_metadata(metadata.unwrap_or_default());
        let value = self.transport.post("/api/memory", &record).await?;
        extract_id(&value)
    }

    /// Store several records concurrently, returning their ids in input
    /// order
    ///
    /// This is a client-side fan-out of independent `store` calls. There is
    /// no atomicity and no ordering guarantee between the requests
    /// themselves; on the first failure the error is returned and any
    /// records already stored stay stored.
    pub async fn store_many(
        &self,
        items: Vec<(serde_json::Value, MemoryType)>,
    ) -> Result<Vec<String>> {
        try_join_all(
            items
                .into_iter()
                .map(|(content, memory_type)| self.store(content, memory_type, None)),
        )
        .await
    }

    /// Fetch a memory record by id
    ///
    /// Returns `Ok(None)` when the server answers 404; all other failures
    /// propagate.
    pub async fn get(&self, id: &str) -> Result<Option<MemoryRecord>> {
        match self.transport.get(&format!("/api/memory/{}", id)).await {
            Ok(value) => Ok(Some(serde_json::from_value(value)?)),
            Err(SynapseError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Search memories by content similarity
    ///
    /// Ranking happens server-side; the client forwards `query`, `limit`,
    /// and a threshold (the configured default when `None`). An empty vec
    /// means the server found nothing above the threshold - a failed request
    /// is always an `Err`.
    pub async fn search(
        &self,
        query: serde_json::Value,
        limit: usize,
        threshold: Option<f32>,
    ) -> Result<Vec<SearchResult>> {
        let body = serde_json::json!({
            "query": query,
            "limit": limit,
            "threshold": self.threshold_or_default(threshold),
        });
        let value = self.transport.post("/api/memory/search", &body).await?;
        extract_list(value, "results")
    }

    /// Declare a one-way association from `id_a` to `id_b`
    ///
    /// The wire API only supports directed edges; see
    /// [`connect_mutual`](Client::connect_mutual) for a symmetric link.
    pub async fn connect(&self, id_a: &str, id_b: &str, strength: f32) -> Result<()> {
        let body = serde_json::json!({
            "memoryId1": id_a,
            "memoryId2": id_b,
            "strength": strength,
        });
        self.transport.post("/api/memory/connect", &body).await?;
        Ok(())
    }

    /// Declare a symmetric association by creating both directed edges
    ///
    /// Issues two independent `connect` calls; if the second fails, the
    /// first edge remains. The server offers no atomic both-ways operation.
    pub async fn connect_mutual(&self, id_a: &str, id_b: &str, strength: f32) -> Result<()> {
        self.connect(id_a, id_b, strength).await?;
        self.connect(id_b, id_a, strength).await
    }

    /// Additively adjust a record's strength
    ///
    /// No clamping: repeated positive deltas grow without bound and negative
    /// results are accepted.
    pub async fn update_strength(&self, id: &str, delta: f32) -> Result<()> {
        let body = serde_json::json!({ "delta": delta });
        self.transport
            .patch(&format!("/api/memory/{}/strength", id), &body)
            .await?;
        Ok(())
    }
}
