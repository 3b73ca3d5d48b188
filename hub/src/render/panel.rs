//! Panel markup generation.
//!
//! Produces the aggregated record list plus chrome as an HTML fragment.
//! The shell page (see `server::assets`) swaps the fragment in on every
//! `panel_update` broadcast. Rendering never mutates the store.

use safe_text::escape;
use serde_json::json;

use super::PanelState;
use crate::app::SharedState;
use crate::events;
use crate::ingest;
use crate::store::NotificationRecord;

/// Everything the panel renderer needs for one pass.
pub struct PanelView<'a> {
    /// Already filtered, newest first.
    pub records: &'a [NotificationRecord],
    pub unread: usize,
    pub state: &'a PanelState,
}

/// Render the panel fragment for the current view.
pub fn render_fragment(view: &PanelView<'_>) -> String {
    let state = view.state;
    let mut out = String::with_capacity(1024);

    out.push_str(&format!(
        "<div class=\"panel {}\" style=\"opacity:{:.2};font-size:{}px\">\n",
        state.theme().class(),
        state.opacity(),
        state.font_size(),
    ));

    out.push_str(&format!(
        "<header class=\"chrome\">\
         <span class=\"unread-badge\">{}</span>\
         <span class=\"filter-indicator\">{}</span>\
         <span class=\"theme-indicator\">{}</span>\
         <span class=\"controls\" data-opacity=\"{:.2}\" data-font-size=\"{}\"></span>\
         </header>\n",
        view.unread,
        state.filter().label(),
        state.theme().label(),
        state.opacity(),
        state.font_size(),
    ));

    out.push_str("<ul class=\"records\">\n");
    if view.records.is_empty() {
        out.push_str("<li class=\"empty-state\">No notifications</li>\n");
    } else {
        let new_id = newest_unread_id(view.records);
        for (index, record) in view.records.iter().enumerate() {
            out.push_str(&render_row(record, index, new_id));
            out.push('\n');
        }
    }
    out.push_str("</ul>\n</div>");
    out
}

/// The single most-recently-pushed still-unread record, if any.
fn newest_unread_id(records: &[NotificationRecord]) -> Option<u64> {
    records.iter().filter(|r| !r.read).map(|r| r.id).max()
}

fn render_row(record: &NotificationRecord, index: usize, new_id: Option<u64>) -> String {
    let mut classes = String::from("record ");
    classes.push_str(if record.read { "read" } else { "unread" });
    if !record.read && new_id == Some(record.id) {
        classes.push_str(" new");
    }
    // Cosmetic banding only.
    classes.push_str(if index % 2 == 0 { " even" } else { " odd" });

    format!(
        "<li class=\"{}\" data-id=\"{}\">\
         <span class=\"badge\">{}</span>\
         <span class=\"msg\">{}</span>\
         <span class=\"project\">{}</span>\
         <span class=\"target\">{}</span>\
         <time>{}</time>\
         </li>",
        classes,
        record.id,
        ingest::badge(record.tag),
        escape(ingest::strip_tag(&record.message)),
        escape(&record.project),
        escape(&record.session_target),
        record.timestamp.format("%H:%M"),
    )
}

/// Re-render the current view and broadcast it to all live surfaces.
/// A send with no receivers is a no-op — a hidden panel simply misses
/// the update and re-fetches on its next load.
pub async fn broadcast(state: &SharedState) {
    let panel = state.panel().lock().await;
    let store = state.store().lock().await;
    let records = store.filtered(panel.filter());
    let view = PanelView {
        records: &records,
        unread: store.count_unread(),
        state: &panel,
    };
    let payload = events::PanelUpdatePayload {
        html: render_fragment(&view),
        unread: view.unread,
    };
    let message = json!({ "type": events::PANEL_UPDATE, "data": payload });
    let _ = state.ws_sender().send(message.to_string());
}
