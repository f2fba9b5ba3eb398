//! Core types for Rolodex
//!
//! This crate defines the foundational types used throughout the system:
//! - ContactId: Validated contact identifier with random generation
//! - Contact: The five-field contact record
//! - Limits: Field length bounds (defaults plus test overrides)
//! - Field, ValidationError: Validation failures with field attribution
//! - Error, Result: Error hierarchy for directory operations

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod contact;
pub mod error;
pub mod limits;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use contact::Contact;
pub use error::{Error, Result};
pub use limits::{Limits, MAX_ADDRESS_CHARS, MAX_ID_CHARS, MAX_NAME_CHARS, PHONE_NUMBER_CHARS};
pub use types::ContactId;
pub use validate::{Field, ValidationError};
