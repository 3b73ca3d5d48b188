//! Bounded in-memory notification store.
//!
//! Records are appended at the tail (newest last) and evicted FIFO once
//! the capacity is exceeded. IDs are monotonic for the process lifetime
//! and survive `clear()`, so post-clear records never collide with IDs a
//! client may still hold.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ingest::{self, Tag};

/// Maximum number of retained records.
pub const STORE_CAPACITY: usize = 30;

/// One ingested notification event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    /// Display message, possibly carrying a literal tag prefix (see `ingest`).
    pub message: String,
    /// Multiplexer session locator, or `"none"`.
    pub session_target: String,
    /// Multiplexer pane locator, or `"none"`.
    pub pane_id: String,
    /// Display label for the originating project, may be empty.
    pub project: String,
    pub read: bool,
    /// Semantic kind, computed once at ingestion from the tag prefix.
    pub tag: Tag,
}

/// Filter modes for the panel view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyFilter {
    All,
    NeedsInput,
    Done,
}

impl NotifyFilter {
    /// Parse the control-plane path segment (`all` | `input` | `done`).
    pub fn from_path(mode: &str) -> Option<Self> {
        match mode {
            "all" => Some(Self::All),
            "input" => Some(Self::NeedsInput),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::NeedsInput => "Needs input",
            Self::Done => "Done",
        }
    }
}

/// Capacity-bounded, ordered record store. Single-writer by construction:
/// the hub process owns the only instance, behind a mutex in `SharedState`.
#[derive(Debug)]
pub struct NotificationStore {
    records: VecDeque<NotificationRecord>,
    next_id: u64,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(STORE_CAPACITY + 1),
            next_id: 1,
        }
    }

    /// Append a new unread record, evicting the oldest when over capacity.
    /// Always succeeds; returns a clone of the stored record.
    pub fn push(
        &mut self,
        message: &str,
        session_target: &str,
        pane_id: &str,
        project: &str,
    ) -> NotificationRecord {
        let record = NotificationRecord {
            id: self.next_id,
            timestamp: Utc::now(),
            message: message.to_string(),
            session_target: session_target.to_string(),
            pane_id: pane_id.to_string(),
            project: project.to_string(),
            read: false,
            tag: ingest::tag_of(message),
        };
        self.next_id += 1;

        self.records.push_back(record.clone());
        if self.records.len() > STORE_CAPACITY {
            self.records.pop_front();
        }
        record
    }

    /// Mark a record read. No-op when the id is absent or already read.
    pub fn mark_read(&mut self, id: u64) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for record in self.records.iter_mut() {
            record.read = true;
        }
    }

    /// Drop all records. IDs keep counting from their prior maximum.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn count_unread(&self) -> usize {
        self.records.iter().filter(|r| !r.read).count()
    }

    pub fn get(&self, id: u64) -> Option<&NotificationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `filter`, newest first.
    pub fn filtered(&self, filter: NotifyFilter) -> Vec<NotificationRecord> {
        self.records
            .iter()
            .rev()
            .filter(|r| match filter {
                NotifyFilter::All => true,
                NotifyFilter::NeedsInput => r.tag == Tag::NeedsInput,
                NotifyFilter::Done => r.tag == Tag::Done,
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_plain(store: &mut NotificationStore, message: &str) -> NotificationRecord {
        store.push(message, "none", "none", "")
    }

    #[test]
    fn push_assigns_strictly_increasing_ids_from_one() {
        let mut store = NotificationStore::new();
        let a = push_plain(&mut store, "first");
        let b = push_plain(&mut store, "second");
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn size_never_exceeds_capacity_and_evicts_fifo() {
        let mut store = NotificationStore::new();
        for i in 0..31 {
            push_plain(&mut store, &format!("event {i}"));
        }
        assert_eq!(store.len(), STORE_CAPACITY);
        // 31 pushes, capacity 30: record 1 was evicted, record 2 survives.
        let oldest = store.filtered(NotifyFilter::All).last().map(|r| r.id);
        assert_eq!(oldest, Some(2));
        assert!(store.get(1).is_none());
    }

    #[test]
    fn ids_keep_increasing_across_clear() {
        let mut store = NotificationStore::new();
        push_plain(&mut store, "before");
        push_plain(&mut store, "before 2");
        store.clear();
        assert!(store.is_empty());
        let after = push_plain(&mut store, "after");
        assert_eq!(after.id, 3);
    }

    #[test]
    fn mark_read_is_idempotent_and_tolerates_unknown_ids() {
        let mut store = NotificationStore::new();
        let record = push_plain(&mut store, "hello");
        store.mark_read(record.id);
        store.mark_read(record.id);
        store.mark_read(9999);
        assert_eq!(store.count_unread(), 0);
        assert!(store.get(record.id).is_some_and(|r| r.read));
    }

    #[test]
    fn mark_all_read_clears_unread_count() {
        let mut store = NotificationStore::new();
        for i in 0..5 {
            push_plain(&mut store, &format!("event {i}"));
        }
        assert_eq!(store.count_unread(), 5);
        store.mark_all_read();
        assert_eq!(store.count_unread(), 0);
    }

    #[test]
    fn filtered_honors_tag_prefixes_newest_first() {
        let mut store = NotificationStore::new();
        push_plain(&mut store, "🔔 Approval needed");
        push_plain(&mut store, "✅ Task complete");
        push_plain(&mut store, "plain note");
        push_plain(&mut store, "🔔 Waiting for input");

        let all = store.filtered(NotifyFilter::All);
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].id > w[1].id));

        let input = store.filtered(NotifyFilter::NeedsInput);
        assert_eq!(input.len(), 2);
        assert!(input.iter().all(|r| r.tag == Tag::NeedsInput));

        let done = store.filtered(NotifyFilter::Done);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].message, "✅ Task complete");
    }

    #[test]
    fn approval_scenario() {
        let mut store = NotificationStore::new();
        store.push("🔔 Approval needed", "main:1", "%3", "repo-a");
        assert_eq!(store.len(), 1);
        assert_eq!(store.count_unread(), 1);
        assert_eq!(store.filtered(NotifyFilter::NeedsInput).len(), 1);
        assert_eq!(store.filtered(NotifyFilter::Done).len(), 0);
    }
}
