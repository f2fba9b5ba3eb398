//! Rolodex - In-memory contact directory with validated records
//!
//! Rolodex keeps contact records in memory: five validated fields per
//! contact, random collision-checked ids, and add/find/delete/update
//! operations over the list.
//!
//! # Quick Start
//!
//! ```
//! use rolodex::Directory;
//!
//! // Create an empty directory
//! let mut directory = Directory::new();
//!
//! // Add a contact (the id is generated)
//! let id = directory
//!     .add_contact("Fred", "Smith", "0123456789", "123 Test Lane")
//!     .unwrap();
//!
//! // Look it up and change a field
//! assert_eq!(directory.find_contact(id.as_str()).unwrap().first_name(), "Fred");
//! directory.update_address(id.as_str(), "9 Elm Street").unwrap();
//!
//! // Remove it
//! let removed = directory.delete_contact(id.as_str()).unwrap();
//! assert_eq!(removed.address(), "9 Elm Street");
//! ```
//!
//! # Architecture
//!
//! Field rules and record types live in rolodex-core; the [`Directory`]
//! and the process-wide instance in [`registry`] live in
//! rolodex-directory. For one shared directory across a whole process,
//! use [`registry::global`] instead of constructing your own.

// Re-export the public API from rolodex-directory
pub use rolodex_directory::*;
