pub mod app;
pub mod config;
pub mod events;
pub mod focus;
pub mod ingest;
pub mod notification;
pub mod render;
pub mod server;
pub mod shutdown;
pub mod store;

use std::path::PathBuf;

use config::HubConfig;

/// Determine the data directory for the hub.
/// Priority: SESSION_BELL_DATA_DIR env var > ~/.session-bell
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SESSION_BELL_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".session-bell")
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Resolve the data dir and load the immutable startup configuration.
pub fn init_foundation() -> HubConfig {
    load_dotenv();

    let dir = data_dir();
    let config = HubConfig::load_or_default(&dir.join("config.json"));

    tracing::info!(
        port = config.control_port,
        terminal = %config.terminal_app,
        multiplexer = config.multiplexer_enabled,
        "Settings loaded"
    );
    config
}
