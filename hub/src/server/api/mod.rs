//! Control-plane handlers grouped by concern.

pub mod control;
pub mod notify;
pub mod panel;

use axum::Json;
use serde_json::{Value, json};

/// Fixed acknowledgement returned by every control action, recognized or
/// not. Protocol errors never surface to the human; a wrong request is
/// only observable through the absence of the expected visual change.
pub fn ack() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
