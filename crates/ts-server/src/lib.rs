//! Text simplifier HTTP API server (Axum).
//!
//! `POST /api/simplify` runs the engine on a JSON request; `GET /health`
//! reports liveness.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;
use tokio::net::TcpListener;
use tracing::info;
use ts_core::SimplifierConfig;

/// Build the application router with default configuration.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::simplify_routes())
        .with_state(state)
}

/// Bind the configured address and serve until the process exits.
pub async fn serve(config: SimplifierConfig) -> anyhow::Result<()> {
    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "text simplifier listening");
    axum::serve(listener, app_with_state(AppState::with_config(config))).await?;
    Ok(())
}
