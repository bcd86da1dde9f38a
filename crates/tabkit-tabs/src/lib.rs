//! TabKit tab model
//!
//! Tabs are the selectable triggers of a tab strip; each pairs with a
//! content panel by shared identifier, and at most one tab is active at
//! a time.

mod content;
mod error;
mod set;
mod state;
mod tab;

pub use content::{Content, ContentDescriptor, PanelAria};
pub use error::TabError;
pub use set::{Position, TabSet};
pub use state::PanelState;
pub use tab::{Tab, TabAria, TabDescriptor};

pub type Result<T> = std::result::Result<T, TabError>;
