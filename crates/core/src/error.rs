//! Error types for directory operations
//!
//! Two failure families cover the whole API: a field failed validation,
//! or a lookup named an id that no record carries. [`ValidationError`]
//! converts into [`Error`] via `From`, so validating code composes with
//! `?` inside directory operations.

use crate::validate::ValidationError;
use thiserror::Error;

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by directory operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No contact carries the requested id
    #[error("contact not found: {id}")]
    ContactNotFound {
        /// The id that was looked up
        id: String,
    },
}

impl Error {
    /// True if this is a lookup miss rather than a validation failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ContactNotFound { .. })
    }
}
