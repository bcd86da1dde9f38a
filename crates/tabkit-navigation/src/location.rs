//! Page location and fragment handling
//!
//! The URL fragment doubles as the inbound activation signal (a tab id
//! present at load time) and the outbound one (each history entry carries
//! the page URL with its fragment set to the activated tab).

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self {
            url: Url::parse(input)?,
        })
    }

    /// Tab id carried in the fragment, if any
    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment().filter(|fragment| !fragment.is_empty())
    }

    pub fn set_fragment(&mut self, tab_id: &str) {
        self.url.set_fragment(Some(tab_id));
    }

    pub fn href(&self) -> String {
        self.url.to_string()
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }
}
