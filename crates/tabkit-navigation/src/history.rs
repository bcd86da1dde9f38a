//! Session history for tab switches
//!
//! Models the browser history contract: pushing a new entry drops any
//! forward entries, back/forward move a cursor and yield the entry the
//! embedding layer should replay. The initial activation is anchored as
//! a baseline entry (replace semantics) so the first back() after a real
//! switch can return to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Identifier of the tab this entry re-activates
    pub tab: String,
    /// Human-readable title, e.g. "Settings - Billing"
    pub title: String,
    /// Page URL whose fragment names the tab
    pub url: String,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(tab: &str, title: &str, url: &str) -> Self {
        Self {
            tab: tab.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            visited_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationHistory {
    entries: Vec<HistoryEntry>,
    /// Index of the current entry; `None` until something is recorded
    cursor: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new entry, truncating any forward entries first
    pub fn push(&mut self, tab: &str, title: &str, url: &str) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }

        self.entries.push(HistoryEntry::new(tab, title, url));
        self.cursor = Some(self.entries.len() - 1);

        tracing::debug!(tab = %tab, entries = self.entries.len(), "Pushed history entry");
    }

    /// Record the initial activation without adding an entry.
    ///
    /// Replaces the current entry when one exists, the way a page load
    /// occupies a history slot before any pushes happen.
    pub fn anchor(&mut self, tab: &str, title: &str, url: &str) {
        let entry = HistoryEntry::new(tab, title, url);
        match self.cursor {
            Some(cursor) => self.entries[cursor] = entry,
            None => {
                self.entries.push(entry);
                self.cursor = Some(0);
            }
        }

        tracing::debug!(tab = %tab, "Anchored initial history entry");
    }

    /// Step the cursor back and yield the entry to replay
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        let cursor = self.cursor?;
        let previous = cursor.checked_sub(1)?;
        self.cursor = Some(previous);
        self.entries.get(previous)
    }

    /// Step the cursor forward and yield the entry to replay
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        let cursor = self.cursor?;
        let next = cursor + 1;
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        self.entries.get(next)
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor?)
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.entries.len())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
