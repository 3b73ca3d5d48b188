pub mod api;
pub mod assets;
pub mod router;
pub mod websocket;

use anyhow::Result;

use crate::app::SharedState;

/// Start the control-plane HTTP + WebSocket server.
///
/// Loopback only: remote access is out of scope by design, so the bind
/// address is the guard.
pub async fn start_server(state: SharedState) -> Result<()> {
    let port = state.control_port();
    let shutdown_token = state.shutdown_token().clone();
    let app = router::create_router(state);

    let addr = format!("127.0.0.1:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Control plane listening on http://{addr}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_token.cancelled().await;
        })
        .await?;

    Ok(())
}
