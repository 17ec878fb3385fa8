//! Bondcalc API Server binary.

use std::path::PathBuf;

use anyhow::Context;
use bondcalc_api::{config::ApiConfig, server::run_server, state::AppState};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_CONFIG_PATH: &str = "config/bondcalc.toml";

/// Bondcalc fixed-rate bond calculator REST API Server
#[derive(Parser, Debug)]
#[command(name = "bondcalc-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host address to bind to (overrides the config file)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> anyhow::Result<ApiConfig> {
    let mut config = match &args.config {
        Some(path) => ApiConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() => {
            ApiConfig::from_file(DEFAULT_CONFIG_PATH)?
        }
        None => ApiConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(address = %config.bind_address(), "starting bondcalc server");

    run_server(AppState::with_config(config)).await
}
