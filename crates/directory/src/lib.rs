//! In-memory contact directory
//!
//! This crate holds the directory layer on top of rolodex-core:
//! - Directory: the contact list with add/find/delete/update operations
//! - registry: the process-wide shared instance behind a mutex
//!
//! The directory is the only component that knows about:
//! - Id generation and the uniqueness check against stored contacts
//! - Lookup order (insertion order, first match wins)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod directory;
pub mod registry;

pub use directory::Directory;

// Core types surface here too, so depending on rolodex-directory alone
// is enough to use the whole API.
pub use rolodex_core::{
    Contact, ContactId, Error, Field, Limits, Result, ValidationError, MAX_ADDRESS_CHARS,
    MAX_ID_CHARS, MAX_NAME_CHARS, PHONE_NUMBER_CHARS,
};
