//! Toast markup generation.
//!
//! One record, one small overlay snippet. Clicking the toast acknowledges
//! the record through the control plane, so the snippet carries the id.

use safe_text::escape;

use crate::events::ToastShowPayload;
use crate::ingest;
use crate::store::NotificationRecord;

/// Render a single toast snippet for the given record.
pub fn render(record: &NotificationRecord) -> ToastShowPayload {
    let html = format!(
        "<div class=\"toast\" data-id=\"{}\">\
         <span class=\"badge\">{}</span>\
         <span class=\"msg\">{}</span>\
         <span class=\"project\">{}</span>\
         </div>",
        record.id,
        ingest::badge(record.tag),
        escape(ingest::strip_tag(&record.message)),
        escape(&record.project),
    );
    ToastShowPayload {
        id: record.id,
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NotificationStore;

    #[test]
    fn toast_carries_id_badge_and_stripped_message() {
        let mut store = NotificationStore::new();
        let record = store.push("✅ Task complete", "main:1", "%3", "repo-a");
        let payload = render(&record);
        assert_eq!(payload.id, record.id);
        assert!(payload.html.contains(&format!("data-id=\"{}\"", record.id)));
        assert!(payload.html.contains(">OK<"));
        assert!(payload.html.contains(">Task complete<"));
        assert!(!payload.html.contains("✅"));
    }

    #[test]
    fn toast_escapes_untrusted_text() {
        let mut store = NotificationStore::new();
        let record = store.push("<img onerror=x>", "none", "none", "a<b");
        let payload = render(&record);
        assert!(!payload.html.contains("<img"));
        assert!(payload.html.contains("&lt;img onerror=x&gt;"));
        assert!(payload.html.contains("a&lt;b"));
    }
}
