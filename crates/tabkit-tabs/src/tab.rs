//! Tab data structure
//!
//! A tab is a selectable trigger paired with one content panel by shared
//! identifier. The accessibility annotation (role, controls relationship,
//! roving tabindex) is derived from the tab's flags, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier within the owning tab set
    pub id: String,
    /// Display label
    pub label: String,
    /// Disabled tabs keep their position but refuse user activation
    pub enabled: bool,
    /// Whether this tab is the currently selected one
    pub active: bool,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Accessibility annotation mirrored onto the rendered trigger
#[derive(Debug, Clone, Serialize)]
pub struct TabAria {
    pub role: &'static str,
    pub controls: String,
    pub selected: bool,
    pub disabled: bool,
    pub tab_index: i32,
}

/// Caller-supplied description of a tab present at initialization.
///
/// A descriptor without an id gets a position-derived one (`tab-<index>`)
/// when the controller builds its set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub id: Option<String>,
    pub label: String,
    pub active: bool,
    pub disabled: bool,
}

impl TabDescriptor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            active: false,
            disabled: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark this tab as the pre-selected one
    pub fn marked_active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TabError::InvalidId("tab id cannot be empty".to_string()));
        }

        let now = Utc::now();

        Ok(Self {
            id,
            label: label.into().trim().to_string(),
            enabled: true,
            active: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Mark the tab as selected
    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.updated_at = Utc::now();
        }
    }

    /// Clear the selected flag
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.updated_at = Utc::now();
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.updated_at = Utc::now();
        }
    }

    /// Roving tabindex: the active tab is the single keyboard tab stop
    pub fn tab_index(&self) -> i32 {
        if self.active {
            0
        } else {
            -1
        }
    }

    /// Element id of the associated content panel
    pub fn content_element_id(&self) -> String {
        format!("content-{}", self.id)
    }

    pub fn aria(&self) -> TabAria {
        TabAria {
            role: "tab",
            controls: self.content_element_id(),
            selected: self.active,
            disabled: !self.enabled,
            tab_index: self.tab_index(),
        }
    }
}
