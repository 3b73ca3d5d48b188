//! WebSocket message type constants and payloads.
//!
//! The panel/toast surface (a page served at `/panel`) receives these
//! over `/ws`; the control plane never pushes anything else.

use serde::Serialize;

// -- Message type constants --

pub const CONNECTED: &str = "connected";
pub const PANEL_UPDATE: &str = "panel_update";
pub const PANEL_RELOAD: &str = "reload";
pub const TOAST_SHOW: &str = "toast_show";
pub const TOAST_HIDE: &str = "toast_hide";

// -- Payload types --

#[derive(Debug, Clone, Serialize)]
pub struct PanelUpdatePayload {
    pub html: String,
    pub unread: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToastShowPayload {
    pub id: u64,
    pub html: String,
}
