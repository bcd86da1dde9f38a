//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
