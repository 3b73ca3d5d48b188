//! Inbound event decoding and the message tag convention.
//!
//! The external agent posts free-form JSON. A structured payload names an
//! event kind; the kind maps to a short display message through a fixed
//! table. The semantic category travels as a literal prefix on the
//! message text (bell = needs input, check mark = done) — producers that
//! pre-tag their messages get identical filter behavior.

use serde::Serialize;

/// Literal prefix marking a "needs input" message.
pub const BELL_TAG: &str = "🔔 ";
/// Literal prefix marking a "done" message.
pub const CHECK_TAG: &str = "✅ ";

/// Message shown when the payload is unparseable or the kind is unknown.
pub const FALLBACK_MESSAGE: &str = "Agent notification";

/// Sentinel for an absent locator.
pub const NO_LOCATOR: &str = "none";

/// Semantic category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    NeedsInput,
    Done,
    Generic,
}

/// Event kind → display message. Data, not logic.
const KIND_MESSAGES: &[(&str, &str)] = &[
    ("permission_needed", "🔔 Approval needed"),
    ("permission", "🔔 Approval needed"),
    ("idle", "🔔 Waiting for input"),
    ("waiting_input", "🔔 Waiting for input"),
    ("task_complete", "✅ Task complete"),
    ("complete", "✅ Task complete"),
    ("done", "✅ Task complete"),
];

/// Classify a message by its literal tag prefix.
pub fn tag_of(message: &str) -> Tag {
    if message.starts_with(BELL_TAG.trim_end()) {
        Tag::NeedsInput
    } else if message.starts_with(CHECK_TAG.trim_end()) {
        Tag::Done
    } else {
        Tag::Generic
    }
}

/// Display text with the tag prefix removed.
pub fn strip_tag(message: &str) -> &str {
    message
        .strip_prefix(BELL_TAG)
        .or_else(|| message.strip_prefix(CHECK_TAG))
        .or_else(|| message.strip_prefix(BELL_TAG.trim_end()))
        .or_else(|| message.strip_prefix(CHECK_TAG.trim_end()))
        .unwrap_or(message)
        .trim_start()
}

/// Short categorical badge rendered instead of the prefix.
pub fn badge(tag: Tag) -> &'static str {
    match tag {
        Tag::NeedsInput => "IN",
        Tag::Done => "OK",
        Tag::Generic => "-",
    }
}

/// A decoded inbound event, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub message: String,
    pub session_target: String,
    pub pane_id: String,
    pub project: String,
}

/// Decode a raw request body. Never fails: a bad payload degrades to the
/// generic fallback message with no locators.
pub fn decode(body: &[u8]) -> InboundEvent {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("Unparseable notify payload, using fallback: {e}");
            serde_json::Value::Null
        }
    };

    let field = |key: &str| -> Option<String> {
        value
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    };

    let message = field("message")
        .filter(|m| !m.is_empty())
        .or_else(|| field("kind").map(|k| message_for_kind(&k).to_string()))
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

    InboundEvent {
        message,
        session_target: field("sessionTarget").unwrap_or_else(|| NO_LOCATOR.to_string()),
        pane_id: field("paneId").unwrap_or_else(|| NO_LOCATOR.to_string()),
        project: field("project").unwrap_or_default(),
    }
}

fn message_for_kind(kind: &str) -> &'static str {
    KIND_MESSAGES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, msg)| *msg)
        .unwrap_or(FALLBACK_MESSAGE)
}
