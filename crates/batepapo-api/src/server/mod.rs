//! Server setup and initialization
//!
//! Provides the application builder, dependency wiring, and the server
//! runner that owns the presence sweeper task.

use std::sync::Arc;

use axum::Router;
use batepapo_common::{AppConfig, AppError};
use batepapo_db::{create_pool, SqliteMessageRepository, SqliteParticipantRepository};
use batepapo_service::{PresenceSweeper, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors_config = state.config().cors.clone();
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &cors_config);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Opening SQLite database...");
    let db_config = batepapo_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database ready");

    // Create repositories
    let participant_repo = Arc::new(SqliteParticipantRepository::new(pool.clone()));
    let message_repo = Arc::new(SqliteMessageRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .participant_repo(participant_repo)
        .message_repo(message_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the complete server with configuration
///
/// Spawns the presence sweeper alongside the HTTP server and joins it on
/// shutdown so in-flight sweeps finish before the process exits.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();
    let presence_config = config.presence.clone();

    // Create app state
    let state = create_app_state(config).await?;

    // Spawn the presence sweeper
    let cancel = CancellationToken::new();
    let sweeper = PresenceSweeper::new(state.service_context().clone(), &presence_config);
    let sweeper_handle = tokio::spawn(sweeper.run(cancel.clone()));

    // Build application
    let app = create_app(state);

    info!("Starting HTTP server on {addr}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;
    info!("Server listening on http://{addr}");

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Server error: {e}")));

    // Stop the sweeper and wait for it
    cancel.cancel();
    if let Err(e) = sweeper_handle.await {
        warn!(error = %e, "Presence sweeper task panicked");
    }

    result
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
