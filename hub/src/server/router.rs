use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use super::{api, assets, websocket};
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        .route("/ws", get(websocket::ws_handler))
        // --- Control plane ---
        .route("/clear", get(api::control::clear))
        .route("/alpha/{value}", get(api::control::set_opacity))
        .route("/click/{id}", get(api::control::click))
        .route("/readall", get(api::control::read_all))
        .route("/fontsize/{value}", get(api::control::set_font_size))
        .route("/filter/{mode}", get(api::control::set_filter))
        .route("/theme/{mode}", get(api::control::set_theme))
        .route("/quit", get(api::control::quit))
        .route("/restart", get(api::control::restart))
        // --- Ingestion ---
        .route("/notify", post(api::notify::push))
        // --- Panel surface ---
        .route("/panel", get(assets::panel_index))
        .route("/panel/fragment", get(api::panel::fragment))
        // Unrecognized actions are accepted and ignored.
        .fallback(api::control::unknown)
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
