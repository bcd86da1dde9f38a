//! Tab strip configuration
//!
//! Constructed once at startup and handed to the controller by value;
//! components never reach for ambient globals.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page URL whose fragment names the initially requested tab
    pub page_url: String,
    /// Prefix for history entry titles: "<prefix> - <tab label>"
    pub history_title_prefix: String,
    /// Fade-in duration for panel reveals; zero disables the transition
    pub fade: Duration,
}

impl Config {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            history_title_prefix: "Settings".to_string(),
            fade: Duration::from_millis(300),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
