use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::ConfigLoader;
use payroll_engine::error::EngineError;
use payroll_engine::store::PayrollStore;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "config/payroll.yaml")]
    config: PathBuf,

    /// Overrides the configured bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match ConfigLoader::load(&args.config) {
        Ok(config) => config,
        Err(EngineError::ConfigNotFound { path }) => {
            warn!(path = %path, "Configuration file not found, using defaults");
            ConfigLoader::default()
        }
        Err(err) => return Err(err).context("loading configuration"),
    };

    let bind_address = args
        .bind
        .unwrap_or_else(|| config.server().bind_address.clone());

    let store = Arc::new(PayrollStore::new());
    let router = create_router(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {}", bind_address))?;
    info!(address = %bind_address, "Payroll API listening");

    axum::serve(listener, router).await.context("serving HTTP")?;
    Ok(())
}
