//! Synapse CLI
//!
//! Command-line interface for the Synapse memory API.

use std::collections::HashMap;
use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use synapse::error::Result;
use synapse::types::{GraphNode, MemoryType};
use synapse::{Client, Config, SynapseError};

#[derive(Parser)]
#[command(name = "synapse")]
#[command(about = "Synapse memory API client")]
#[command(version)]
struct Cli {
    /// Server base URL
    #[arg(long, env = "SYNAPSE_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Bearer token for authentication
    #[arg(long, env = "SYNAPSE_API_KEY")]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "SYNAPSE_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show server status
    Status,
    /// Show server statistics
    Stats,
    /// Store a memory record
    Store {
        /// Content: a JSON value, or plain text stored as {"text": ...}
        content: String,
        /// Memory type (episodic, semantic, procedural, emotional)
        #[arg(short = 't', long, default_value = "semantic")]
        r#type: MemoryType,
        /// Metadata as a JSON object
        #[arg(short, long)]
        metadata: Option<String>,
    },
    /// Fetch a memory record by id
    Get {
        /// Memory id
        id: String,
    },
    /// Search memories by content similarity
    Search {
        /// Search query
        query: String,
        /// Maximum results
        #[arg(short, long, default_value = "10")]
        limit: usize,
        /// Similarity threshold (default: client config)
        #[arg(short, long)]
        threshold: Option<f32>,
    },
    /// Connect two memory records
    Connect {
        /// Source memory id
        id_a: String,
        /// Target memory id
        id_b: String,
        /// Connection strength
        #[arg(short, long, default_value = "1.0")]
        strength: f32,
        /// Create both directed edges
        #[arg(long)]
        mutual: bool,
    },
    /// Adjust a record's strength by a delta
    Strength {
        /// Memory id
        id: String,
        /// Additive delta (may be negative)
        delta: f32,
    },
    /// Create or update a graph node
    Node {
        /// Node id
        id: String,
        /// Human-readable label
        label: String,
        /// Node type
        #[arg(short = 't', long, default_value = "concept")]
        r#type: String,
        /// Properties as a JSON object
        #[arg(short, long)]
        properties: Option<String>,
    },
    /// Fetch graph neighbors of a node
    Neighbors {
        /// Node id
        id: String,
        /// Traversal depth
        #[arg(short, long, default_value = "1")]
        depth: usize,
    },
    /// Delete ALL server-side data
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn parse_content(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::json!({ "text": raw }))
}

fn parse_metadata(raw: Option<String>) -> Result<Option<HashMap<String, serde_json::Value>>> {
    raw.map(|s| {
        serde_json::from_str(&s)
            .map_err(|e| SynapseError::Config(format!("metadata must be a JSON object: {}", e)))
    })
    .transpose()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::new(cli.base_url)
        .with_timeout(std::time::Duration::from_secs(cli.timeout_secs));
    if let Some(key) = cli.api_key {
        config = config.with_api_key(key);
    }
    let client = Client::new(config)?;

    match cli.command {
        Commands::Status => {
            let status = client.status().await?;
            print_json(&status)?;
        }
        Commands::Stats => {
            let stats = client.statistics().await?;
            print_json(&stats)?;
        }
        Commands::Store {
            content,
            r#type,
            metadata,
        } => {
            let metadata = parse_metadata(metadata)?;
            let id = client.store(parse_content(&content), r#type, metadata).await?;
            println!("{}", id);
        }
        Commands::Get { id } => match client.get(&id).await? {
            Some(record) => print_json(&record)?,
            None => {
                eprintln!("Memory {} not found", id);
                std::process::exit(1);
            }
        },
        Commands::Search {
            query,
            limit,
            threshold,
        } => {
            let results = client
                .search(parse_content(&query), limit, threshold)
                .await?;
            if results.is_empty() {
                eprintln!("No results");
            } else {
                print_json(&results)?;
            }
        }
        Commands::Connect {
            id_a,
            id_b,
            strength,
            mutual,
        } => {
            if mutual {
                client.connect_mutual(&id_a, &id_b, strength).await?;
                println!("Connected {} <-> {}", id_a, id_b);
            } else {
                client.connect(&id_a, &id_b, strength).await?;
                println!("Connected {} -> {}", id_a, id_b);
            }
        }
        Commands::Strength { id, delta } => {
            client.update_strength(&id, delta).await?;
            println!("Adjusted strength of {} by {:+}", id, delta);
        }
        Commands::Node {
            id,
            label,
            r#type,
            properties,
        } => {
            let mut node = GraphNode::new(id, label, r#type);
            if let Some(props) = parse_metadata(properties)? {
                node = node.with_properties(props);
            }
            client.put_node(&node).await?;
            println!("Stored node {}", node.id);
        }
        Commands::Neighbors { id, depth } => {
            let neighbors = client.neighbors(&id, depth).await?;
            print_json(&neighbors)?;
        }
        Commands::Clear { yes } => {
            if !yes {
                eprintln!("This deletes ALL data on the server. Re-run with --yes to confirm.");
                io::stderr().flush().ok();
                std::process::exit(1);
            }
            client.clear_all().await?;
            println!("Cleared");
        }
    }

    Ok(())
}
