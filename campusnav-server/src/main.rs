use std::net::SocketAddr;
use std::path::PathBuf;

use campusnav_server::{config::Config, error::ServerError, start_server};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

/// Campus walking-route server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the config file
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Buildings JSON file, overrides the config file
    #[arg(long)]
    buildings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(buildings) = args.buildings {
        config.directory.buildings_path = buildings;
    }

    start_server(config).await
}
