//! Content panel paired with a tab
//!
//! The body is opaque to the tab machinery; it is carried for the
//! embedding renderer and for event payloads, never interpreted.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::state::PanelState;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Identifier of the tab this panel belongs to
    pub tab_id: String,
    /// Opaque renderable body, owned by the caller
    pub body: String,
    /// Current visibility state
    pub state: PanelState,
}

/// Accessibility annotation mirrored onto the rendered panel
#[derive(Debug, Clone, Serialize)]
pub struct PanelAria {
    pub role: &'static str,
    pub labelled_by: String,
    pub hidden: bool,
}

/// Caller-supplied description of a content panel present at
/// initialization, keyed by its tab's identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDescriptor {
    pub tab_id: String,
    pub body: String,
}

impl ContentDescriptor {
    pub fn new(tab_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            tab_id: tab_id.into(),
            body: body.into(),
        }
    }
}

impl Content {
    pub fn new(tab_id: impl Into<String>, body: impl Into<String>) -> Result<Self> {
        let tab_id = tab_id.into();
        if tab_id.trim().is_empty() {
            return Err(TabError::InvalidId(
                "content tab id cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            tab_id,
            body: body.into(),
            state: PanelState::Hidden,
        })
    }

    /// Attempt to transition to a new visibility state
    pub fn transition_to(&mut self, new_state: PanelState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            tab_id = %self.tab_id,
            from = %self.state,
            to = %new_state,
            "Panel state transition"
        );

        self.state = new_state;
        Ok(())
    }

    /// Reveal the panel, fading in when `animated` is set
    pub fn show(&mut self, animated: bool) -> Result<()> {
        let target = if animated {
            PanelState::Entering
        } else {
            PanelState::Shown
        };
        self.transition_to(target)
    }

    /// Hide the panel immediately; an in-flight fade is abandoned
    pub fn hide(&mut self) -> Result<()> {
        self.transition_to(PanelState::Hidden)
    }

    /// Complete an in-flight fade
    pub fn settle(&mut self) -> Result<()> {
        if self.state == PanelState::Entering {
            self.transition_to(PanelState::Shown)
        } else {
            Ok(())
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Element id the paired tab's controls-relationship points at
    pub fn element_id(&self) -> String {
        format!("content-{}", self.tab_id)
    }

    pub fn aria(&self) -> PanelAria {
        PanelAria {
            role: "tabpanel",
            labelled_by: self.tab_id.clone(),
            hidden: !self.is_visible(),
        }
    }
}
