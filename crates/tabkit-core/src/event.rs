//! Tab change notifications
//!
//! Emitted on every successful switch for unrelated page logic to react
//! to (lazy-loading panel data, analytics). Subscribers are plain
//! callbacks; the payload also serializes for embedding layers that
//! forward events across a process or language boundary.

use serde::Serialize;
use std::sync::Arc;

use crate::Result;

/// Presentation hint for the panel reveal; consumers may ignore it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FadeSpec {
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabChanged {
    /// Identifier of the newly active tab
    pub tab_id: String,
    /// Its display label
    pub label: String,
    /// Element id of the revealed panel, when the tab has content
    pub content_id: Option<String>,
    /// Set when the reveal is animated
    pub fade: Option<FadeSpec>,
}

impl TabChanged {
    /// Serialized payload for embedding layers
    pub fn to_payload(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

pub type Subscriber = Arc<dyn Fn(&TabChanged) + Send + Sync>;
