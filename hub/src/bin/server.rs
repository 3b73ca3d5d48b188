//! Hub binary.
//!
//! Starts the loopback control-plane server and the toast worker, then
//! waits for Ctrl+C or a `/quit` request.

use tracing_subscriber::EnvFilter;

use session_bell::app::SharedState;
use session_bell::notification::queue;
use session_bell::{server, shutdown};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting session-bell hub");

    let config = session_bell::init_foundation();
    let state = SharedState::new(config);

    queue::start_worker(state.clone()).await;

    let server_state = state.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server::start_server(server_state).await {
            tracing::error!("Server failed: {e}");
        }
    });

    tracing::info!(
        port = state.control_port(),
        "Hub running. Press Ctrl+C to stop."
    );

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            shutdown::graceful_shutdown(&state).await;
        }
        // `/quit` runs the shutdown sequence itself.
        _ = state.shutdown_token().cancelled() => {}
    }

    let _ = server_handle.await;
    Ok(())
}
