//! Synapse - client for the Synapse memory API
//!
//! Associative memory records, server-side similarity search, and a
//! knowledge graph namespace over authenticated JSON HTTP, plus local
//! vector math that never leaves the process.
//!
//! ```no_run
//! use synapse::{Client, Config, MemoryType};
//!
//! # async fn demo() -> synapse::Result<()> {
//! let client = Client::new(Config::new("http://localhost:8000"))?;
//! let id = client
//!     .store(serde_json::json!({"text": "deploy went fine"}), MemoryType::Episodic, None)
//!     .await?;
//! let record = client.get(&id).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod vecmath;

mod graph;
mod memory;
mod transport;
mod vector;

pub use client::Client;
pub use config::Config;
pub use error::{Result, SynapseError};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
