//! Relay entry point.
//!
//! Reads configuration from the environment, wires the Bedrock client
//! via bootstrap, and serves until the process is stopped.

use clap::Parser;
use tokio::net::TcpListener;

use brelay_axum::{bootstrap, serve};
use brelay_core::RelayConfig;

/// Single-route HTTP relay for hosted model completions.
#[derive(Debug, Parser)]
#[command(name = "brelay", version, about)]
struct Cli {
    /// Listening port (overrides the PORT environment variable).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = RelayConfig::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let state = bootstrap(&config).await?;

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    serve(listener, state).await
}
