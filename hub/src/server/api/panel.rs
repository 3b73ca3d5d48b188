//! Panel fragment endpoint:
//!   GET /panel/fragment – the current rendered record list + chrome.
//!
//! The shell page fetches this on load; subsequent updates arrive as
//! `panel_update` broadcasts over `/ws`.

use axum::extract::State;
use axum::response::Html;

use crate::app::SharedState;
use crate::render::panel::{PanelView, render_fragment};

pub async fn fragment(State(state): State<SharedState>) -> Html<String> {
    let panel = state.panel().lock().await;
    let store = state.store().lock().await;
    let records = store.filtered(panel.filter());
    let view = PanelView {
        records: &records,
        unread: store.count_unread(),
        state: &panel,
    };
    Html(render_fragment(&view))
}
