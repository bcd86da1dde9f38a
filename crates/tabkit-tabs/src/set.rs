//! Ordered tab/content collection
//!
//! Keeps an explicit id order (visual sequence, keyboard traversal order)
//! next to id-keyed storage. The "at most one active tab" invariant is
//! enforced here: activation always clears every other tab first.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

/// Insertion position for dynamically added tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Start,
    End,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabSet {
    /// Display/traversal order of tab ids
    order: Vec<String>,
    tabs: HashMap<String, Tab>,
    contents: HashMap<String, Content>,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tab, optionally with its content panel.
    ///
    /// Duplicate identifiers are rejected rather than overwritten; callers
    /// that want replacement must remove the old tab first.
    pub fn insert(&mut self, tab: Tab, content: Option<Content>, position: Position) -> Result<()> {
        if self.tabs.contains_key(&tab.id) {
            return Err(TabError::DuplicateId(tab.id.clone()));
        }

        match position {
            Position::End => self.order.push(tab.id.clone()),
            Position::Start => self.order.insert(0, tab.id.clone()),
        }

        if let Some(content) = content {
            self.contents.insert(tab.id.clone(), content);
        }
        self.tabs.insert(tab.id.clone(), tab);

        Ok(())
    }

    /// Attach a content panel to an id, replacing any existing one.
    ///
    /// A panel whose tab never materializes is tolerated; it simply stays
    /// hidden and unreachable.
    pub fn attach_content(&mut self, content: Content) {
        self.contents.insert(content.tab_id.clone(), content);
    }

    /// Remove a tab and its content panel
    pub fn remove(&mut self, id: &str) -> Option<(Tab, Option<Content>)> {
        let index = self.index_of(id)?;
        self.order.remove(index);
        let tab = self.tabs.remove(id)?;
        let content = self.contents.remove(id);
        Some((tab, content))
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.tabs.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Tab> {
        self.tabs.get_mut(id)
    }

    pub fn content(&self, id: &str) -> Option<&Content> {
        self.contents.get(id)
    }

    pub fn content_mut(&mut self, id: &str) -> Option<&mut Content> {
        self.contents.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tabs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|entry| entry == id)
    }

    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(String::as_str)
    }

    pub fn first_id(&self) -> Option<&str> {
        self.id_at(0)
    }

    pub fn last_id(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    /// Tabs cloned in display order
    pub fn ordered(&self) -> Vec<Tab> {
        self.order
            .iter()
            .filter_map(|id| self.tabs.get(id))
            .cloned()
            .collect()
    }

    /// Identifier of the active tab, if any
    pub fn active_id(&self) -> Option<String> {
        self.order
            .iter()
            .find(|id| self.tabs.get(*id).is_some_and(|tab| tab.active))
            .cloned()
    }

    /// The neighbor that takes over when `id` is removed: the next tab in
    /// sequence, falling back to the previous one.
    pub fn adjacent_to(&self, id: &str) -> Option<String> {
        let index = self.index_of(id)?;
        self.order
            .get(index + 1)
            .or_else(|| index.checked_sub(1).and_then(|prev| self.order.get(prev)))
            .cloned()
    }

    /// Deactivate every tab and hide every panel
    pub fn deactivate_all(&mut self) {
        for tab in self.tabs.values_mut() {
            tab.deactivate();
        }
        for content in self.contents.values_mut() {
            let _ = content.hide();
        }
    }

    /// Activate one tab, clearing all others first.
    ///
    /// Returns the activated tab, or `None` for an unknown id. Panel
    /// visibility is left to the caller, which knows whether the reveal
    /// is animated.
    pub fn activate(&mut self, id: &str) -> Option<Tab> {
        if !self.tabs.contains_key(id) {
            return None;
        }

        self.deactivate_all();

        let tab = self.tabs.get_mut(id)?;
        tab.activate();
        Some(tab.clone())
    }

    /// Complete any in-flight panel fade
    pub fn settle_all(&mut self) {
        for content in self.contents.values_mut() {
            let _ = content.settle();
        }
    }
}
