//! Campus proxy binary

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campus_proxy::{HttpServer, ProxyConfig};

/// Campus proxy - relays frontend requests to the backend service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campus_proxy=debug,tower_http=debug")),
        )
        .init();

    let config = match cli.config {
        Some(path) => {
            info!("Loading configuration from: {path}");
            ProxyConfig::from_file(&path)?
        }
        None => ProxyConfig::load()?,
    };

    let server = HttpServer::new(config)?;
    server.start().await?;

    Ok(())
}
