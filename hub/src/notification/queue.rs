//! Toast worker.
//!
//! At most one toast is visible at any time: a newer `Show` supersedes
//! the current toast and restarts the dismiss timer, so two pushes inside
//! the dismiss window leave exactly one visible toast and no stale timer.
//! The worker also emits the panel update for a push right after the
//! toast show, which keeps the show-before-rerender ordering.

use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::app::SharedState;
use crate::events;
use crate::render::{panel, toast};
use crate::store::NotificationRecord;

const QUEUE_CAPACITY: usize = 64;
/// Auto-dismiss delay.
pub const TOAST_DURATION_SECS: u64 = 4;

/// Commands accepted by the worker.
#[derive(Debug)]
pub enum ToastCommand {
    Show(NotificationRecord),
    Dismiss,
}

/// Start the toast worker and register its sender on the shared state.
pub async fn start_worker(state: SharedState) {
    let (tx, rx) = mpsc::channel::<ToastCommand>(QUEUE_CAPACITY);
    state.set_toast_sender(tx).await;

    let worker_state = state.clone();
    tokio::spawn(worker_loop(worker_state, rx));
    tracing::info!("Toast worker started");
}

/// Request a toast for a freshly pushed record.
pub async fn show(state: &SharedState, record: NotificationRecord) {
    send(state, ToastCommand::Show(record)).await;
}

/// Dismiss the current toast immediately (toast click).
pub async fn dismiss(state: &SharedState) {
    send(state, ToastCommand::Dismiss).await;
}

/// Drop the sender so the worker loop drains and stops.
pub async fn close(state: &SharedState) {
    state.take_toast_sender().await;
}

async fn send(state: &SharedState, command: ToastCommand) {
    let Some(tx) = state.toast_sender().await else {
        tracing::debug!("Toast worker not running, command dropped");
        return;
    };
    if tx.try_send(command).is_err() {
        tracing::warn!("Toast queue full or closed");
    }
}

async fn worker_loop(state: SharedState, mut rx: mpsc::Receiver<ToastCommand>) {
    while let Some(command) = rx.recv().await {
        let ToastCommand::Show(record) = command else {
            // Dismiss with nothing visible is a no-op.
            continue;
        };
        show_toast(&state, &record);
        panel::broadcast(&state).await;

        // One toast is on screen. A newer Show supersedes it and restarts
        // the timer; Dismiss or the timeout hides it.
        loop {
            match timeout(Duration::from_secs(TOAST_DURATION_SECS), rx.recv()).await {
                Ok(Some(ToastCommand::Show(newer))) => {
                    show_toast(&state, &newer);
                    panel::broadcast(&state).await;
                }
                Ok(Some(ToastCommand::Dismiss)) => break,
                Ok(None) => {
                    hide_toast(&state);
                    tracing::info!("Toast worker stopped");
                    return;
                }
                Err(_) => break,
            }
        }
        hide_toast(&state);
    }

    tracing::info!("Toast worker stopped");
}

fn show_toast(state: &SharedState, record: &NotificationRecord) {
    let payload = json!({
        "type": events::TOAST_SHOW,
        "data": toast::render(record),
    });
    let _ = state.ws_sender().send(payload.to_string());
}

fn hide_toast(state: &SharedState) {
    let payload = json!({
        "type": events::TOAST_HIDE,
        "data": null,
    });
    let _ = state.ws_sender().send(payload.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HubConfig;
    use crate::store::NotificationStore;

    fn state_with_worker() -> SharedState {
        SharedState::new(HubConfig::default())
    }

    fn record(message: &str) -> NotificationRecord {
        NotificationStore::new().push(message, "none", "none", "")
    }

    #[tokio::test(start_paused = true)]
    async fn second_push_within_window_supersedes_first_toast() {
        let state = state_with_worker();
        start_worker(state.clone()).await;
        let mut rx = state.subscribe_ws();

        show(&state, record("first")).await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        show(&state, record("second")).await;

        // Let the timer run out for the surviving toast only.
        tokio::time::sleep(Duration::from_secs(TOAST_DURATION_SECS + 1)).await;

        let mut shows = 0;
        let mut hides = 0;
        while let Ok(msg) = rx.try_recv() {
            let value: serde_json::Value = serde_json::from_str(&msg).unwrap();
            match value["type"].as_str().unwrap() {
                events::TOAST_SHOW => shows += 1,
                events::TOAST_HIDE => hides += 1,
                _ => {}
            }
        }
        assert_eq!(shows, 2);
        // The first toast's timer was superseded: exactly one hide fired.
        assert_eq!(hides, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_hides_before_the_timer() {
        let state = state_with_worker();
        start_worker(state.clone()).await;
        let mut rx = state.subscribe_ws();

        show(&state, record("click me")).await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        dismiss(&state).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        let mut saw_hide = false;
        while let Ok(msg) = rx.try_recv() {
            let value: serde_json::Value = serde_json::from_str(&msg).unwrap();
            if value["type"] == events::TOAST_HIDE {
                saw_hide = true;
            }
        }
        assert!(saw_hide);
    }

    #[tokio::test(start_paused = true)]
    async fn toast_show_precedes_panel_update_for_the_same_push() {
        let state = state_with_worker();
        start_worker(state.clone()).await;
        let mut rx = state.subscribe_ws();

        show(&state, record("ordering")).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        let mut order = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            let value: serde_json::Value = serde_json::from_str(&msg).unwrap();
            order.push(value["type"].as_str().unwrap().to_string());
        }
        let show_pos = order.iter().position(|t| t == events::TOAST_SHOW);
        let panel_pos = order.iter().position(|t| t == events::PANEL_UPDATE);
        assert!(show_pos.is_some() && panel_pos.is_some());
        assert!(show_pos < panel_pos);
    }
}
