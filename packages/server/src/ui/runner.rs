//! Server runner.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{config::ServerConfig, error::ServerError};

use super::{router::create_router, signal::shutdown_signal, state::AppState};

/// Run the server with in-memory stores until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let state = Arc::new(AppState::in_memory());
    let app = create_router(state);

    tracing::info!("Tournament server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}
