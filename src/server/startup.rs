use dioxus_logger::tracing;
use std::net::SocketAddr;

use crate::server::{config::Config, data::PointStore, error::AppError, router, state::AppState};

/// Loads the point store and builds the shared state.
///
/// Never fails: a missing or malformed points document yields an empty store.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `AppState` - State ready to hand to the bot
pub async fn build_state(config: &Config) -> AppState {
    let store = PointStore::load(&config.points_path).await;
    AppState::new(store, config.guild_id, config.backup.clone())
}

/// Serves the keep-alive router until the process exits.
///
/// Should be called from within a tokio::spawn task.
///
/// # Arguments
/// - `addr` - Address to bind
///
/// # Returns
/// - `Ok(())` - Server shut down
/// - `Err(AppError::IoErr)` - Failed to bind or serve
pub async fn serve_keep_alive(addr: SocketAddr) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Keep-alive listening on {}", addr);

    axum::serve(listener, router::router()).await?;

    Ok(())
}
