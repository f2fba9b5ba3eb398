//! Field length limits for contact records
//!
//! This module defines the length bounds enforced on every contact field,
//! at construction and on every subsequent mutation. Violations result in
//! `ValidationError`s naming the field and the bound.
//!
//! ## Contract
//!
//! The default limits are the validation contract of the directory. They
//! are FROZEN and cannot change without a major version bump:
//! - id, first name, last name: at most 10 characters
//! - phone number: exactly 10 characters
//! - address: at most 30 characters
//!
//! All lengths are counted in Unicode characters, not bytes.

/// Maximum length of a contact id, in characters
pub const MAX_ID_CHARS: usize = 10;

/// Maximum length of a first or last name, in characters
pub const MAX_NAME_CHARS: usize = 10;

/// Required length of a phone number, in characters
pub const PHONE_NUMBER_CHARS: usize = 10;

/// Maximum length of an address, in characters
pub const MAX_ADDRESS_CHARS: usize = 30;

/// Length bounds for contact fields
///
/// The `Default` limits are the frozen contract above. Custom limits exist
/// so tests can exercise bound enforcement without building long strings.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum id length in characters (default: 10)
    pub max_id_chars: usize,

    /// Maximum first/last name length in characters (default: 10)
    pub max_name_chars: usize,

    /// Required phone number length in characters (default: exactly 10)
    pub phone_number_chars: usize,

    /// Maximum address length in characters (default: 30)
    pub max_address_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_id_chars: MAX_ID_CHARS,
            max_name_chars: MAX_NAME_CHARS,
            phone_number_chars: PHONE_NUMBER_CHARS,
            max_address_chars: MAX_ADDRESS_CHARS,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    ///
    /// This is useful for unit tests that need to test bound enforcement
    /// without constructing strings dozens of characters long.
    pub fn with_small_limits() -> Self {
        Limits {
            max_id_chars: 4,
            max_name_chars: 3,
            phone_number_chars: 4,
            max_address_chars: 6,
        }
    }
}
