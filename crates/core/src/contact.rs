//! The contact record type
//!
//! [`Contact`] bundles an id with four validated fields. Fields are
//! private; every mutation goes through a validating setter, so a held
//! record never violates the field rules in [`crate::validate`].

use crate::types::ContactId;
use crate::validate::{
    validate_address, validate_first_name, validate_last_name, validate_phone_number,
    ValidationError,
};
use serde::{Deserialize, Serialize};

/// A contact record with validated fields
///
/// The id is fixed at construction; the remaining four fields can be
/// updated through setters that validate before assigning. A failed
/// update leaves the previous value in place. Deserialization routes
/// through the same validators, so a decoded record obeys the rules
/// too.
///
/// # Examples
///
/// ```
/// use rolodex_core::{Contact, ContactId};
///
/// let id = ContactId::new("1001").unwrap();
/// let mut contact = Contact::new(id, "Fred", "Smith", "0123456789", "123 Test Lane").unwrap();
///
/// assert_eq!(contact.first_name(), "Fred");
///
/// // A rejected update does not disturb the stored value
/// assert!(contact.set_first_name("ThisNameIsTooLongToUpdate").is_err());
/// assert_eq!(contact.first_name(), "Fred");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContact")]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone_number: String,
    address: String,
}

impl Contact {
    /// Create a contact, validating every field
    ///
    /// Fields are checked in declaration order; the first failure is
    /// returned and nothing is constructed.
    pub fn new(
        id: ContactId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let phone_number = phone_number.into();
        let address = address.into();

        validate_first_name(&first_name)?;
        validate_last_name(&last_name)?;
        validate_phone_number(&phone_number)?;
        validate_address(&address)?;

        Ok(Contact {
            id,
            first_name,
            last_name,
            phone_number,
            address,
        })
    }

    /// The contact's id
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    /// The contact's first name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The contact's last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The contact's phone number
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// The contact's address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Update the first name, validating the new value first
    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_first_name(&value)?;
        self.first_name = value;
        Ok(())
    }

    /// Update the last name, validating the new value first
    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_last_name(&value)?;
        self.last_name = value;
        Ok(())
    }

    /// Update the phone number, validating the new value first
    pub fn set_phone_number(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_phone_number(&value)?;
        self.phone_number = value;
        Ok(())
    }

    /// Update the address, validating the new value first
    pub fn set_address(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_address(&value)?;
        self.address = value;
        Ok(())
    }
}

// Deserialization input. The field checks run in the TryFrom conversion
// before a Contact exists, so a decoded payload cannot carry
// out-of-bounds fields.
#[derive(Deserialize)]
struct RawContact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone_number: String,
    address: String,
}

impl TryFrom<RawContact> for Contact {
    type Error = ValidationError;

    fn try_from(raw: RawContact) -> Result<Self, Self::Error> {
        Contact::new(
            raw.id,
            raw.first_name,
            raw.last_name,
            raw.phone_number,
            raw.address,
        )
    }
}
