//! Discrete control actions:
//!   GET /clear              – drop all records
//!   GET /alpha/{value}      – set panel opacity (clamped to [0.1, 1.0])
//!   GET /click/{id}         – acknowledge a record and jump to its session
//!   GET /readall            – mark every record read
//!   GET /fontsize/{value}   – set panel font size (clamped to [10, 20])
//!   GET /filter/{mode}      – all | input | done
//!   GET /theme/{mode}       – dark | light
//!   GET /quit               – graceful shutdown
//!   GET /restart            – recreate the panel surface
//!
//! Every action returns the same fixed acknowledgement; malformed
//! arguments are ignored.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::Uri;
use serde_json::{Value, json};

use super::ack;
use crate::app::SharedState;
use crate::notification::queue;
use crate::render::{Theme, panel};
use crate::store::NotifyFilter;
use crate::{events, focus, shutdown};

pub async fn clear(State(state): State<SharedState>) -> Json<Value> {
    state.store().lock().await.clear();
    panel::broadcast(&state).await;
    ack()
}

pub async fn set_opacity(
    State(state): State<SharedState>,
    Path(value): Path<String>,
) -> Json<Value> {
    match parse_opacity(&value) {
        Some(opacity) => {
            state.panel().lock().await.set_opacity(opacity);
            panel::broadcast(&state).await;
        }
        None => tracing::debug!(%value, "Ignoring malformed opacity"),
    }
    ack()
}

pub async fn click(State(state): State<SharedState>, Path(id): Path<String>) -> Json<Value> {
    let Ok(id) = id.parse::<u64>() else {
        tracing::debug!(%id, "Ignoring malformed click id");
        return ack();
    };

    let record = {
        let mut store = state.store().lock().await;
        store.mark_read(id);
        store.get(id).cloned()
    };
    queue::dismiss(&state).await;

    if let Some(record) = record {
        let config = state.config().clone();
        tokio::spawn(async move {
            focus::dispatch(&config, &record.session_target, &record.pane_id).await;
        });
    }

    panel::broadcast(&state).await;
    ack()
}

pub async fn read_all(State(state): State<SharedState>) -> Json<Value> {
    state.store().lock().await.mark_all_read();
    panel::broadcast(&state).await;
    ack()
}

pub async fn set_font_size(
    State(state): State<SharedState>,
    Path(value): Path<String>,
) -> Json<Value> {
    match value.parse::<u32>() {
        Ok(size) => {
            state.panel().lock().await.set_font_size(size);
            panel::broadcast(&state).await;
        }
        Err(_) => tracing::debug!(%value, "Ignoring malformed font size"),
    }
    ack()
}

pub async fn set_filter(
    State(state): State<SharedState>,
    Path(mode): Path<String>,
) -> Json<Value> {
    match NotifyFilter::from_path(&mode) {
        Some(filter) => {
            state.panel().lock().await.set_filter(filter);
            panel::broadcast(&state).await;
        }
        None => tracing::debug!(%mode, "Ignoring unknown filter mode"),
    }
    ack()
}

pub async fn set_theme(State(state): State<SharedState>, Path(mode): Path<String>) -> Json<Value> {
    match Theme::from_path(&mode) {
        Some(theme) => {
            state.panel().lock().await.set_theme(theme);
            panel::broadcast(&state).await;
        }
        None => tracing::debug!(%mode, "Ignoring unknown theme"),
    }
    ack()
}

pub async fn quit(State(state): State<SharedState>) -> Json<Value> {
    tracing::info!("Quit requested");
    tokio::spawn(async move {
        shutdown::graceful_shutdown(&state).await;
    });
    ack()
}

/// Dispose and recreate the panel surface: connected pages reload and
/// re-fetch the current fragment.
pub async fn restart(State(state): State<SharedState>) -> Json<Value> {
    tracing::info!("Restart requested");
    let message = json!({ "type": events::PANEL_RELOAD, "data": null });
    let _ = state.ws_sender().send(message.to_string());
    ack()
}

/// Fallback for unrecognized actions: accepted and ignored.
pub async fn unknown(uri: Uri) -> Json<Value> {
    tracing::debug!(path = uri.path(), "Ignoring unrecognized action");
    ack()
}

fn parse_opacity(raw: &str) -> Option<f32> {
    raw.parse::<f32>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HubConfig;

    fn state() -> SharedState {
        SharedState::new(HubConfig::default())
    }

    #[test]
    fn parse_opacity_rejects_garbage() {
        assert_eq!(parse_opacity("0.5"), Some(0.5));
        assert_eq!(parse_opacity("abc"), None);
        assert_eq!(parse_opacity("NaN"), None);
        assert_eq!(parse_opacity("inf"), None);
    }

    #[tokio::test]
    async fn alpha_clamps_low_values_to_minimum() {
        let state = state();
        set_opacity(State(state.clone()), Path("0.02".into())).await;
        assert_eq!(state.panel().lock().await.opacity(), 0.1);
    }

    #[tokio::test]
    async fn malformed_alpha_is_ignored_but_acknowledged() {
        let state = state();
        let before = state.panel().lock().await.opacity();
        set_opacity(State(state.clone()), Path("high".into())).await;
        assert_eq!(state.panel().lock().await.opacity(), before);
    }

    #[tokio::test]
    async fn fontsize_clamps_into_range() {
        let state = state();
        set_font_size(State(state.clone()), Path("99".into())).await;
        assert_eq!(state.panel().lock().await.font_size(), 20);
        set_font_size(State(state.clone()), Path("3".into())).await;
        assert_eq!(state.panel().lock().await.font_size(), 10);
    }

    #[tokio::test]
    async fn unknown_filter_mode_leaves_state_untouched() {
        let state = state();
        set_filter(State(state.clone()), Path("input".into())).await;
        set_filter(State(state.clone()), Path("bogus".into())).await;
        assert_eq!(
            state.panel().lock().await.filter(),
            NotifyFilter::NeedsInput
        );
    }

    #[tokio::test]
    async fn readall_and_clear_mutate_the_store() {
        let state = state();
        {
            let mut store = state.store().lock().await;
            store.push("one", "none", "none", "");
            store.push("two", "none", "none", "");
        }
        read_all(State(state.clone())).await;
        assert_eq!(state.store().lock().await.count_unread(), 0);

        clear(State(state.clone())).await;
        assert!(state.store().lock().await.is_empty());
    }

    #[tokio::test]
    async fn click_marks_the_record_read() {
        let state = state();
        // Record with "none" locators: the dispatch task skips the mux.
        let id = {
            let mut store = state.store().lock().await;
            store.push("note", "none", "none", "").id
        };
        click(State(state.clone()), Path(id.to_string())).await;
        assert!(state.store().lock().await.get(id).is_some_and(|r| r.read));
    }

    #[tokio::test]
    async fn malformed_click_id_is_ignored() {
        let state = state();
        {
            let mut store = state.store().lock().await;
            store.push("note", "none", "none", "");
        }
        click(State(state.clone()), Path("not-a-number".into())).await;
        assert_eq!(state.store().lock().await.count_unread(), 1);
    }
}
