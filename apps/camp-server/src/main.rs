//! Camp server: REST API over campers, activities and signups

mod config;
mod seed;

use anyhow::{anyhow, Context, Result};
use axum::Router;
use camp_service::CampServiceModule;
use clap::Parser;
use config::{AppConfig, LoggingConfig};
use sea_orm::{ConnectOptions, Database};
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "camp-server", version, about = "Camp activities REST server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Insert sample activities, campers and signups before serving
    #[arg(long)]
    seed: bool,
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("invalid log filter")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!(e))
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .max_connections(config.database.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", config.database.url))?;

    CampServiceModule::migrate(&db).await?;
    let module = CampServiceModule::init(db);

    if cli.seed {
        seed::run(&module.service()).await.context("seeding failed")?;
    }

    let app = module
        .register_rest(Router::new())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "camp server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("camp server stopped");
    Ok(())
}
