//! ts-server — HTTP front end for the text simplifier.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ts_core::SimplifierConfig;

#[derive(Parser)]
#[command(name = "ts-server")]
#[command(version, about = "HTTP API for the text simplifier", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long, env = "TS_CONFIG")]
    config: Option<PathBuf>,

    /// Bind host, overrides the config file
    #[arg(long, env = "TS_HOST")]
    host: Option<String>,

    /// Bind port, overrides the config file
    #[arg(long, env = "TS_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimplifierConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimplifierConfig::default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    ts_server::serve(config).await
}
