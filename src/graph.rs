//! Knowledge graph operations
//!
//! The `/api/graph` namespace is structurally close to memory connections
//! but stored separately server-side; the API keeps the two apart and so
//! does this client.

use crate::client::Client;
use crate::error::Result;
use crate::transport::extract_list;
use crate::types::GraphNode;

impl Client {
    /// Create or update a graph node
    pub async fn put_node(&self, node: &GraphNode) -> Result<()> {
        self.transport.post("/api/graph/node", node).await?;
        Ok(())
    }

    /// Connect two graph nodes with a weighted directed edge
    pub async fn connect_nodes(&self, id_a: &str, id_b: &str, weight: f32) -> Result<()> {
        let body = serde_json::json!({
            "nodeId1": id_a,
            "nodeId2": id_b,
            "weight": weight,
        });
        self.transport.post("/api/graph/connect", &body).await?;
        Ok(())
    }

    /// Fetch the neighbors of a node up to `depth` hops away
    pub async fn neighbors(&self, id: &str, depth: usize) -> Result<Vec<GraphNode>> {
        let body = serde_json::json!({ "depth": depth });
        let value = self
            .transport
            .post(&format!("/api/graph/neighbors/{}", id), &body)
            .await?;
        extract_list(value, "neighbors")
    }
}
