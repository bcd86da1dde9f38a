//! TabKit Core
//!
//! Coordination layer for the tab strip: the controller facade owns the
//! tab set and keeps history, focus, and accessibility state consistent
//! with the single-active-tab invariant.

mod config;
mod controller;
mod error;
mod event;

pub use config::Config;
pub use controller::TabController;
pub use error::CoreError;
pub use event::{FadeSpec, Subscriber, TabChanged};

// Re-export the model and navigation surface
pub use tabkit_navigation::{
    HistoryEntry, KeyResolution, NavKey, NavigationError, NavigationHistory, PageLocation,
};
pub use tabkit_tabs::{
    Content, ContentDescriptor, PanelState, Position, Tab, TabDescriptor, TabError, TabSet,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
