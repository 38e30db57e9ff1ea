use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use educenter_content::cms::CmsClient;
use educenter_content::config::Config;
use educenter_content::db::Database;
use educenter_content::prefs::PreferenceStore;
use educenter_content::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("educenter_content=info".parse()?),
        )
        .init();

    info!("Starting EduCenter content service");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(environment = %config.environment, "configuration loaded");

    // Connect to the environment's database and confirm it answers
    let db = Database::connect(&config).await?;
    db.ping().await?;
    info!(backend = db.client_name(), "database ready");

    // User preferences are loaded once and injected into the serving layer
    let prefs = PreferenceStore::load(&config.preferences_file)?;
    info!(
        language = prefs.current().language.code(),
        "preferences loaded"
    );

    let state = AppState {
        cms: Arc::new(CmsClient::new(&config)),
        db,
        preferences: prefs.current(),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, server::router(state)).await?;

    Ok(())
}
