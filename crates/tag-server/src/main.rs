use anyhow::{Context, Result};
use clap::Parser;
use infrastructure::{SeaOrmTagRepository, ServerConfig};
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tag_server::{api, auth::BasicAuthenticator, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding default.toml and per-RUN_MODE overrides
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Override the HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Apply pending database migrations before serving
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tag_server=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("🏷️ Tag Server Starting...");

    // 1. Load Configuration
    let mut config = ServerConfig::load(&args.config_dir)
        .with_context(|| format!("loading configuration from {}", args.config_dir))?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    info!(config_dir = %args.config_dir, "✅ Configuration loaded");

    // 2. Connect to Database
    info!("Connecting to database...");
    let db = infrastructure::connect(&config.database).await?;

    if args.migrate {
        info!("Running database migrations...");
        Migrator::up(&db, None).await?;
        info!("✅ Migrations applied successfully");
    }

    // 3. Wire services
    let repository = Arc::new(SeaOrmTagRepository::new(db));
    let authenticator = Arc::new(BasicAuthenticator::from_config(&config.auth));
    let state = setup_app_state(repository, authenticator);

    // 4. Start API Server
    let app = api::create_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("🚀 API Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Good bye!");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 Shutting down..."),
        Err(err) => warn!(error = %err, "Unable to listen for shutdown signal"),
    }
}
