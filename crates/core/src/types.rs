//! Identifier types for contact records
//!
//! [`ContactId`] is a validated string newtype: at most ten characters,
//! content otherwise unconstrained. Fresh identifiers come from
//! [`ContactId::random`], which draws a v4 UUID and keeps the first ten
//! hex digits of its simple form.

use crate::limits::MAX_ID_CHARS;
use crate::validate::{validate_id, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A validated contact identifier
///
/// Wraps a string of at most ten characters. Construction goes through
/// [`ContactId::new`], and deserialization through the validating
/// [`TryFrom<String>`], so a held value is always valid.
///
/// # Examples
///
/// ```
/// use rolodex_core::ContactId;
///
/// let id = ContactId::new("1001").unwrap();
/// assert_eq!(id.as_str(), "1001");
///
/// // Too long: eleven characters
/// assert!(ContactId::new("abcdefghijk").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ContactId(String);

impl ContactId {
    /// Create a contact id, validating its length
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        validate_id(&id)?;
        Ok(ContactId(id))
    }

    /// Generate a fresh random id
    ///
    /// Takes the first ten hex digits of a v4 UUID's simple form. The
    /// result is always exactly ten characters, so it does not need
    /// validation. Uniqueness is probabilistic; callers that require it
    /// must check against their own population.
    pub fn random() -> Self {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(MAX_ID_CHARS);
        ContactId(token)
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContactId::new(value)
    }
}

impl TryFrom<&str> for ContactId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ContactId::new(value)
    }
}
