/**
 * Server Initialization
 *
 * Builds the application from a validated `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Build the session key ring
 * 2. Connect the database pool and run migrations
 * 3. Create the router with the shared state
 *
 * Unlike request errors, startup errors are fatal: the binary logs them and
 * exits non-zero.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Reasons the server can fail to start
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Unreachable database or failed migration
    #[error("Database initialization failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing Bookswap server");

    let sessions = SessionKeys::new(&config.session_keys)?;
    tracing::info!("Loaded {} session key(s)", config.session_keys.len());

    let db = load_database(config).await?;
    tracing::info!("Database connected and migrated");

    let app = create_router(AppState::new(db, sessions), &config.static_dir);
    tracing::info!("Router configured, serving static files from {}", config.static_dir.display());

    Ok(app)
}
