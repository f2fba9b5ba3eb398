//! Field validation for contact records
//!
//! This module defines the validation rules enforced by the record type
//! and, through it, by every directory operation.
//!
//! ## Contract
//!
//! After stabilization, these rules are FROZEN:
//! - Fields are `String`s: non-null is guaranteed by the type system.
//! - id, first name, last name must not exceed `max_name_chars`/`max_id_chars`
//!   (default: 10 characters).
//! - phone number must have exactly `phone_number_chars` (default: 10).
//! - address must not exceed `max_address_chars` (default: 30).
//! - Lengths are counted in Unicode characters, not bytes.
//! - The empty string satisfies every at-most bound; only the exact-length
//!   phone rule rejects it.

use crate::limits::Limits;
use std::fmt;
use thiserror::Error;

/// The five fields of a contact record
///
/// Identifies which field failed validation in a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The contact identifier
    Id,
    /// The contact's first name
    FirstName,
    /// The contact's last name
    LastName,
    /// The contact's phone number
    PhoneNumber,
    /// The contact's address
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Id => "contact id",
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::PhoneNumber => "phone number",
            Field::Address => "address",
        };
        write!(f, "{}", name)
    }
}

/// Field validation errors
///
/// Each variant names the field that failed and the bound it violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field exceeds its maximum length
    #[error("{field} too long: {actual} characters exceeds maximum {max}")]
    TooLong {
        /// Field that failed validation
        field: Field,
        /// Actual length in characters
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Field misses its required exact length
    #[error("{field} must be exactly {expected} characters, got {actual}")]
    WrongLength {
        /// Field that failed validation
        field: Field,
        /// Actual length in characters
        actual: usize,
        /// Required length
        expected: usize,
    },
}

impl ValidationError {
    /// The field that failed validation
    pub fn field(&self) -> Field {
        match self {
            ValidationError::TooLong { field, .. } => *field,
            ValidationError::WrongLength { field, .. } => *field,
        }
    }
}

/// Validate a contact id using default limits
///
/// # Examples
///
/// ```
/// use rolodex_core::validate::validate_id;
///
/// assert!(validate_id("0123456789").is_ok());
/// assert!(validate_id("").is_ok()); // empty satisfies an at-most bound
/// assert!(validate_id("elevenchars").is_err());
/// ```
pub fn validate_id(value: &str) -> Result<(), ValidationError> {
    validate_id_with_limits(value, &Limits::default())
}

/// Validate a contact id with custom limits
pub fn validate_id_with_limits(value: &str, limits: &Limits) -> Result<(), ValidationError> {
    at_most(Field::Id, value, limits.max_id_chars)
}

/// Validate a first name using default limits
pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    validate_first_name_with_limits(value, &Limits::default())
}

/// Validate a first name with custom limits
pub fn validate_first_name_with_limits(
    value: &str,
    limits: &Limits,
) -> Result<(), ValidationError> {
    at_most(Field::FirstName, value, limits.max_name_chars)
}

/// Validate a last name using default limits
pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    validate_last_name_with_limits(value, &Limits::default())
}

/// Validate a last name with custom limits
pub fn validate_last_name_with_limits(
    value: &str,
    limits: &Limits,
) -> Result<(), ValidationError> {
    at_most(Field::LastName, value, limits.max_name_chars)
}

/// Validate a phone number using default limits
///
/// Phone numbers carry the only exact-length rule: anything shorter or
/// longer than ten characters is rejected.
///
/// # Examples
///
/// ```
/// use rolodex_core::validate::validate_phone_number;
///
/// assert!(validate_phone_number("0123456789").is_ok());
/// assert!(validate_phone_number("012345678").is_err()); // 9 characters
/// assert!(validate_phone_number("987645231373264").is_err()); // 15 characters
/// ```
pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    validate_phone_number_with_limits(value, &Limits::default())
}

/// Validate a phone number with custom limits
pub fn validate_phone_number_with_limits(
    value: &str,
    limits: &Limits,
) -> Result<(), ValidationError> {
    exactly(Field::PhoneNumber, value, limits.phone_number_chars)
}

/// Validate an address using default limits
pub fn validate_address(value: &str) -> Result<(), ValidationError> {
    validate_address_with_limits(value, &Limits::default())
}

/// Validate an address with custom limits
pub fn validate_address_with_limits(value: &str, limits: &Limits) -> Result<(), ValidationError> {
    at_most(Field::Address, value, limits.max_address_chars)
}

fn at_most(field: Field, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, actual, max });
    }
    Ok(())
}

fn exactly(field: Field, value: &str, expected: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual != expected {
        return Err(ValidationError::WrongLength {
            field,
            actual,
            expected,
        });
    }
    Ok(())
}
