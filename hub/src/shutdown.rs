//! Graceful shutdown sequence.

use std::time::Duration;

use tokio::time::sleep;

use crate::app::SharedState;
use crate::notification::queue;

pub async fn graceful_shutdown(state: &SharedState) {
    tracing::info!("Shutdown sequence started");

    queue::close(state).await;
    tracing::info!("Shutdown: toast queue closed");

    // Let the worker drain its final hide broadcast.
    sleep(Duration::from_millis(200)).await;

    state.shutdown_token().cancel();
    tracing::info!("Shutdown sequence completed");
}
