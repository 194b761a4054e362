//! Ticklist server binary.
//!
//! Serves the to-do page and its CRUD endpoints over a single store
//! document:
//!
//! ```text
//! ticklist --bind 127.0.0.1:3000 --store ticklist.json --credential todo:123456789
//! ```
//!
//! The credential can also come from the `TICKLIST_CREDENTIAL`
//! environment variable so it stays out of shell history and process
//! listings.

use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use ticklist_server::{serve, ServerConfig};
use ticklist_store::{FileStore, ItemStore, MemoryStore};
use tracing_subscriber::EnvFilter;

/// Credential-gated to-do list server.
#[derive(Parser)]
#[command(name = "ticklist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Store document path, or `:memory:` for an ephemeral store
    #[arg(short, long, default_value = "ticklist.json")]
    store: String,

    /// Shared credential as `user:password`
    #[arg(
        short,
        long,
        env = "TICKLIST_CREDENTIAL",
        default_value = "todo:123456789",
        hide_env_values = true
    )]
    credential: String,

    /// Realm reported in the authentication challenge
    #[arg(long, default_value = "ticklist")]
    realm: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (username, password) = cli
        .credential
        .split_once(':')
        .ok_or("credential must be given as user:password")?;

    let store: Arc<dyn ItemStore> = if cli.store == ":memory:" {
        tracing::info!("using an ephemeral in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        let store = FileStore::open(Path::new(&cli.store))?;
        tracing::info!(path = %store.path().display(), "store document opened");
        Arc::new(store)
    };

    let config = ServerConfig::new(cli.bind)
        .with_credential(username, password)
        .with_realm(cli.realm);

    serve(config, store).await?;
    Ok(())
}
