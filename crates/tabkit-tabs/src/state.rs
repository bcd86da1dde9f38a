//! Panel visibility state machine
//!
//! ```text
//! Hidden
//!   ↓ reveal (fade-in starts)
//! Entering
//!   ↓ fade completes
//! Shown
//! ```
//!
//! A panel revealed without animation goes straight from `Hidden` to
//! `Shown`. Switching away mid-fade drops the panel back to `Hidden`;
//! the interrupted fade is abandoned, not replayed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Panel is not displayed
    Hidden,
    /// Panel is displayed and its fade-in is still running
    Entering,
    /// Panel is displayed and settled
    Shown,
}

impl PanelState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: PanelState) -> bool {
        match (self, target) {
            // Hidden can start a fade or appear immediately
            (PanelState::Hidden, PanelState::Entering) => true,
            (PanelState::Hidden, PanelState::Shown) => true,
            // Entering settles when the fade completes, or hides if
            // the user switches away mid-fade
            (PanelState::Entering, PanelState::Shown) => true,
            (PanelState::Entering, PanelState::Hidden) => true,
            // Shown can only hide
            (PanelState::Shown, PanelState::Hidden) => true,
            // Same state is always valid (no-op)
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    /// Returns true if the panel is displayed at all
    pub fn is_visible(&self) -> bool {
        matches!(self, PanelState::Entering | PanelState::Shown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Hidden => "hidden",
            PanelState::Entering => "entering",
            PanelState::Shown => "shown",
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PanelState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hidden" => Ok(PanelState::Hidden),
            "entering" => Ok(PanelState::Entering),
            "shown" => Ok(PanelState::Shown),
            _ => Err(format!("Unknown panel state: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        // Hidden -> Entering (animated reveal)
        assert!(PanelState::Hidden.can_transition_to(PanelState::Entering));
        // Hidden -> Shown (immediate reveal)
        assert!(PanelState::Hidden.can_transition_to(PanelState::Shown));
        // Entering -> Shown (fade completed)
        assert!(PanelState::Entering.can_transition_to(PanelState::Shown));
        // Entering -> Hidden (switched away mid-fade)
        assert!(PanelState::Entering.can_transition_to(PanelState::Hidden));
        // Shown -> Hidden
        assert!(PanelState::Shown.can_transition_to(PanelState::Hidden));
    }

    #[test]
    fn test_invalid_transitions() {
        // A settled panel cannot restart its fade
        assert!(!PanelState::Shown.can_transition_to(PanelState::Entering));
    }

    #[test]
    fn test_visibility() {
        assert!(!PanelState::Hidden.is_visible());
        assert!(PanelState::Entering.is_visible());
        assert!(PanelState::Shown.is_visible());
    }

    #[test]
    fn test_round_trip_strings() {
        assert_eq!("entering".parse::<PanelState>().unwrap(), PanelState::Entering);
        assert_eq!(PanelState::Shown.to_string(), "shown");
        assert!("visible".parse::<PanelState>().is_err());
    }
}
