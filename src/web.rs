//! Liveness HTTP endpoint.
//!
//! External uptime monitors poll the bot over plain HTTP to decide whether
//! the process is alive. Every method and path gets the same fixed 200
//! response; there is no routing and no request parsing.

use axum::Router;
use tokio::net::TcpListener;

use crate::error::AppError;

/// Fixed body returned to every probe.
pub const LIVENESS_BODY: &str = "Bot is alive 🔥";

pub fn router() -> Router {
    Router::new().fallback(alive)
}

async fn alive() -> &'static str {
    LIVENESS_BODY
}

/// Binds the liveness server on all interfaces and serves it forever.
///
/// # Arguments
/// - `port` - TCP port to listen on
///
/// # Returns
/// - `Err(AppError::IoErr)` - The port could not be bound or the server
///   failed while running; never returns Ok under normal operation
pub async fn start(port: u16) -> Result<(), AppError> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Web server running on port {}", port);

    serve(listener).await
}

/// Serves the liveness router on an already-bound listener.
pub async fn serve(listener: TcpListener) -> Result<(), AppError> {
    axum::serve(listener, router()).await?;

    Ok(())
}
