//! TabKit navigation plumbing
//!
//! The three external signals a tab strip answers to:
//! - session history entries replayed by back/forward
//! - the page URL fragment naming a tab at load time
//! - keyboard navigation (arrows, Home/End, Enter/Space)

mod error;
mod history;
mod keys;
mod location;

pub use error::NavigationError;
pub use history::{HistoryEntry, NavigationHistory};
pub use keys::{KeyResolution, NavKey};
pub use location::PageLocation;

pub type Result<T> = std::result::Result<T, NavigationError>;
