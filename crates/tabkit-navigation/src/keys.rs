//! Keyboard navigation resolution
//!
//! Arrow keys move sequentially with wraparound, Home/End jump to the
//! edges, Enter/Space activate the focused tab. Resolution is pure index
//! arithmetic; whether the target may actually activate is the
//! controller's concern.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Home,
    End,
    Enter,
    Space,
}

/// What a key press means for the tab at `current`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResolution {
    /// Move focus (and selection) to the tab at this index
    MoveTo(usize),
    /// Activate the currently focused tab
    Activate,
    /// Nothing to do (empty tab set)
    Ignored,
}

impl NavKey {
    /// Resolve a key press against a strip of `len` tabs with focus on
    /// index `current`.
    pub fn resolve(&self, current: usize, len: usize) -> KeyResolution {
        if len == 0 {
            return KeyResolution::Ignored;
        }

        match self {
            NavKey::ArrowLeft | NavKey::ArrowUp => {
                // Wrap from the first tab to the last
                let target = if current > 0 { current - 1 } else { len - 1 };
                KeyResolution::MoveTo(target)
            }
            NavKey::ArrowRight | NavKey::ArrowDown => {
                // Wrap from the last tab to the first
                let target = if current + 1 < len { current + 1 } else { 0 };
                KeyResolution::MoveTo(target)
            }
            NavKey::Home => KeyResolution::MoveTo(0),
            NavKey::End => KeyResolution::MoveTo(len - 1),
            NavKey::Enter | NavKey::Space => KeyResolution::Activate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavKey::ArrowLeft => "ArrowLeft",
            NavKey::ArrowUp => "ArrowUp",
            NavKey::ArrowRight => "ArrowRight",
            NavKey::ArrowDown => "ArrowDown",
            NavKey::Home => "Home",
            NavKey::End => "End",
            NavKey::Enter => "Enter",
            NavKey::Space => " ",
        }
    }
}

impl std::fmt::Display for NavKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NavKey {
    type Err = String;

    /// Parse a DOM-style key name; unrecognized keys are left to the
    /// caller to ignore.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" => Ok(NavKey::ArrowLeft),
            "ArrowUp" => Ok(NavKey::ArrowUp),
            "ArrowRight" => Ok(NavKey::ArrowRight),
            "ArrowDown" => Ok(NavKey::ArrowDown),
            "Home" => Ok(NavKey::Home),
            "End" => Ok(NavKey::End),
            "Enter" => Ok(NavKey::Enter),
            " " | "Space" | "Spacebar" => Ok(NavKey::Space),
            _ => Err(format!("Unknown navigation key: {}", s)),
        }
    }
}
