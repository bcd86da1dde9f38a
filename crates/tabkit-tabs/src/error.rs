//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Duplicate tab id: {0}")]
    DuplicateId(String),

    #[error("Invalid tab id: {0}")]
    InvalidId(String),

    #[error("Invalid panel transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}
