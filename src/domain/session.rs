//! Session store: append-only log of journal entries plus derived views.

use super::entities::{JournalEntry, TrendPoint};

/// Number of most recent entries inspected by the support alert.
pub const SUPPORT_ALERT_WINDOW: usize = 3;

/// Entries of one interactive session, in insertion order.
///
/// Owned by whoever runs the session; never shared, never persisted.
#[derive(Debug, Default, Clone)]
pub struct Session {
    entries: Vec<JournalEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. No validation happens here; callers filter blank input.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently appended entry.
    pub fn latest(&self) -> Option<&JournalEntry> {
        self.entries.last()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Entries newest first (reverse insertion order).
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &JournalEntry> + '_ {
        self.entries.iter().rev()
    }

    /// `(timestamp, score)` pairs ascending by timestamp; ties keep insertion order.
    pub fn trend(&self) -> Vec<TrendPoint> {
        let mut points: Vec<TrendPoint> = self
            .entries
            .iter()
            .map(|e| TrendPoint {
                timestamp: e.timestamp(),
                score: e.score(),
            })
            .collect();
        // sort_by_key is stable
        points.sort_by_key(|p| p.timestamp);
        points
    }

    /// True when the last three appended entries all scored below zero.
    pub fn support_alert_active(&self) -> bool {
        if self.entries.len() < SUPPORT_ALERT_WINDOW {
            return false;
        }
        self.entries[self.entries.len() - SUPPORT_ALERT_WINDOW..]
            .iter()
            .all(|e| e.score() < 0)
    }
}
