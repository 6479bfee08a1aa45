//! Core types for the Synapse memory API

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Milliseconds since epoch, the timestamp format the API speaks.
pub type TimestampMillis = i64;

/// Current time in milliseconds since epoch
pub fn now_millis() -> TimestampMillis {
    Utc::now().timestamp_millis()
}

/// Memory type tag
///
/// A closed enumeration carried as metadata; the client attaches no behavior
/// to it and the server's handling of each type is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    /// Events with temporal context
    Episodic,
    /// Facts and general knowledge
    #[default]
    Semantic,
    /// Learned patterns and workflows
    Procedural,
    /// Affective associations
    Emotional,
}

impl MemoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryType::Episodic => "episodic",
            MemoryType::Semantic => "semantic",
            MemoryType::Procedural => "procedural",
            MemoryType::Emotional => "emotional",
        }
    }
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MemoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "episodic" => Ok(MemoryType::Episodic),
            "semantic" => Ok(MemoryType::Semantic),
            "procedural" => Ok(MemoryType::Procedural),
            "emotional" => Ok(MemoryType::Emotional),
            _ => Err(format!("Unknown memory type: {}", s)),
        }
    }
}

/// A memory record as stored by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Server-assigned identifier; `None` before the record is stored
    #[serde(default)]
    pub id: Option<String>,
    /// Arbitrary structured payload
    pub content: serde_json::Value,
    /// Memory type tag
    #[serde(rename = "type")]
    pub memory_type: MemoryType,
    /// Recency/importance weight. Initialized to 1.0, adjusted by additive
    /// deltas with no floor or ceiling; negative values are legal.
    #[serde(default = "default_strength")]
    pub strength: f32,
    /// Creation time in milliseconds since epoch, set client-side
    pub timestamp: TimestampMillis,
    /// Ids of associated records. Edges are one-way; a mutual link is two
    /// edges (see `Client::connect_mutual`).
    #[serde(default)]
    pub connections: Vec<String>,
    /// Free-form key/value metadata
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

fn default_strength() -> f32 {
    1.0
}

impl MemoryRecord {
    /// Create a new unstored record with default strength and the current
    /// timestamp
    pub fn new(content: serde_json::Value, memory_type: MemoryType) -> Self {
        Self {
            id: None,
            content,
            memory_type,
            strength: 1.0,
            timestamp: now_millis(),
            connections: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A raw vector stored for similarity search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorEntry {
    #[serde(default)]
    pub id: Option<String>,
    /// Fixed-length numeric array. Dimensionality is only checked by the
    /// server at comparison time.
    pub vector: Vec<f32>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    pub timestamp: TimestampMillis,
}

/// A node in the knowledge graph namespace
///
/// Structurally close to `MemoryRecord`'s connection concept but lives under
/// a separate server namespace; the API never unifies the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

impl GraphNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type: node_type.into(),
            properties: HashMap::new(),
            connections: Vec::new(),
            weight: 1.0,
        }
    }

    pub fn with_properties(mut self, properties: HashMap<String, serde_json::Value>) -> Self {
        self.properties = properties;
        self
    }
}

/// A ranked search hit from memory or vector search
///
/// Ranking is entirely server-side; the client only forwards the query
/// parameters and deserializes the scored results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub score: f32,
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// A single operation inside a `/api/batch` request
///
/// The batch endpoint fans out independent operations server-side and
/// collects results positionally. There is no atomicity: a failed operation
/// does not roll back the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOperation {
    pub operation_type: String,
    pub endpoint: String,
    pub method: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl BatchOperation {
    pub fn new(
        operation_type: impl Into<String>,
        method: impl Into<String>,
        endpoint: impl Into<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self {
            operation_type: operation_type.into(),
            endpoint: endpoint.into(),
            method: method.into(),
            data,
        }
    }
}

/// Health/status snapshot from `/api/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: String,
    /// Everything else the server chooses to report (uptime, counts, ...)
    #[serde(flatten)]
    pub detail: HashMap<String, serde_json::Value>,
}

impl StatusSnapshot {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
