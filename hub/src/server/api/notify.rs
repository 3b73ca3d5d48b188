//! Ingestion endpoint:
//!   POST /notify – push one event from the external agent process.
//!
//! The body is free-form JSON; a bad payload degrades to the generic
//! fallback message and the request is still acknowledged.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value;

use super::ack;
use crate::app::SharedState;
use crate::ingest;
use crate::notification::queue;

pub async fn push(State(state): State<SharedState>, body: Bytes) -> Json<Value> {
    let event = ingest::decode(&body);

    let record = {
        let mut store = state.store().lock().await;
        store.push(
            &event.message,
            &event.session_target,
            &event.pane_id,
            &event.project,
        )
    };
    tracing::info!(id = record.id, project = %record.project, "Notification ingested");

    // The toast worker shows the toast first, then requests the panel
    // re-render (ordering guarantee for surfaces observing both).
    queue::show(&state, record).await;
    ack()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HubConfig;
    use crate::store::NotifyFilter;

    #[tokio::test]
    async fn push_appends_an_unread_record() {
        let state = SharedState::new(HubConfig::default());
        let body = Bytes::from_static(
            r#"{"message":"🔔 Approval needed","sessionTarget":"main:1","paneId":"%3","project":"repo-a"}"#
                .as_bytes(),
        );
        push(State(state.clone()), body).await;

        let store = state.store().lock().await;
        assert_eq!(store.len(), 1);
        assert_eq!(store.count_unread(), 1);
        assert_eq!(store.filtered(NotifyFilter::NeedsInput).len(), 1);
        assert_eq!(store.filtered(NotifyFilter::Done).len(), 0);
    }

    #[tokio::test]
    async fn garbage_body_is_stored_as_generic_notification() {
        let state = SharedState::new(HubConfig::default());
        push(State(state.clone()), Bytes::from_static(b"{{{")).await;

        let store = state.store().lock().await;
        assert_eq!(store.len(), 1);
        let record = &store.filtered(NotifyFilter::All)[0];
        assert_eq!(record.message, ingest::FALLBACK_MESSAGE);
        assert_eq!(record.session_target, ingest::NO_LOCATOR);
    }
}
