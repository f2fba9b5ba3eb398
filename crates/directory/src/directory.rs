//! The in-memory contact directory
//!
//! [`Directory`] owns a list of contacts and exposes the full operation
//! set: add with a generated unique id, find, delete, and per-field
//! updates. Contacts keep insertion order; lookups scan and take the
//! first id match.

use rolodex_core::{Contact, ContactId, Error, Result};
use tracing::{debug, trace};

/// An in-memory directory of contact records
///
/// Ids are generated on insert and checked against every contact already
/// held, so within one directory they are unique. All mutating
/// operations validate before touching stored state; a failed call
/// leaves the directory exactly as it was.
///
/// # Examples
///
/// ```
/// use rolodex_directory::Directory;
///
/// let mut directory = Directory::new();
///
/// let id = directory
///     .add_contact("Fred", "Smith", "0123456789", "123 Test Lane")
///     .unwrap();
///
/// let contact = directory.find_contact(id.as_str()).unwrap();
/// assert_eq!(contact.first_name(), "Fred");
///
/// directory.update_phone_number(id.as_str(), "9876543210").unwrap();
///
/// let removed = directory.delete_contact(id.as_str()).unwrap();
/// assert_eq!(removed.phone_number(), "9876543210");
/// assert!(directory.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Directory {
            contacts: Vec::new(),
        }
    }

    /// Generate an id no current contact carries
    ///
    /// Draws random ids until one misses every stored contact. With a
    /// ten-hex-digit space collisions are vanishingly rare; the loop is
    /// there so the guarantee holds even when they happen.
    pub fn generate_unique_id(&self) -> ContactId {
        self.unique_id_from(ContactId::random)
    }

    fn unique_id_from(&self, mut next: impl FnMut() -> ContactId) -> ContactId {
        loop {
            let candidate = next();
            if !self.id_taken(candidate.as_str()) {
                return candidate;
            }
            trace!(target: "rolodex::directory", id = %candidate, "Generated id already taken, retrying");
        }
    }

    fn id_taken(&self, id: &str) -> bool {
        self.contacts.iter().any(|c| c.id().as_str() == id)
    }

    /// Add a contact with a freshly generated id
    ///
    /// Fields are validated before anything is stored; on failure the
    /// directory is unchanged and the generated id is discarded.
    /// Returns the id the new contact was stored under.
    pub fn add_contact(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<ContactId> {
        let id = self.generate_unique_id();
        let contact = Contact::new(id.clone(), first_name, last_name, phone_number, address)?;
        self.contacts.push(contact);
        debug!(target: "rolodex::directory", id = %id, total = self.contacts.len(), "Contact added");
        Ok(id)
    }

    /// Find the contact with the given id
    ///
    /// Scans in insertion order and returns the first match.
    pub fn find_contact(&self, id: &str) -> Result<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.id().as_str() == id)
            .ok_or_else(|| Error::ContactNotFound { id: id.to_string() })
    }

    fn find_index(&self, id: &str) -> Result<usize> {
        self.contacts
            .iter()
            .position(|c| c.id().as_str() == id)
            .ok_or_else(|| Error::ContactNotFound { id: id.to_string() })
    }

    /// Remove the contact with the given id, returning the record
    pub fn delete_contact(&mut self, id: &str) -> Result<Contact> {
        let index = self.find_index(id)?;
        let removed = self.contacts.remove(index);
        debug!(target: "rolodex::directory", id, remaining = self.contacts.len(), "Contact deleted");
        Ok(removed)
    }

    /// Update the first name of the contact with the given id
    ///
    /// A missing id is reported before the new value is validated, so
    /// an invalid value against an absent contact yields
    /// [`Error::ContactNotFound`].
    pub fn update_first_name(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let index = self.find_index(id)?;
        self.contacts[index].set_first_name(value)?;
        debug!(target: "rolodex::directory", id, "First name updated");
        Ok(())
    }

    /// Update the last name of the contact with the given id
    pub fn update_last_name(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let index = self.find_index(id)?;
        self.contacts[index].set_last_name(value)?;
        debug!(target: "rolodex::directory", id, "Last name updated");
        Ok(())
    }

    /// Update the phone number of the contact with the given id
    pub fn update_phone_number(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let index = self.find_index(id)?;
        self.contacts[index].set_phone_number(value)?;
        debug!(target: "rolodex::directory", id, "Phone number updated");
        Ok(())
    }

    /// Update the address of the contact with the given id
    pub fn update_address(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let index = self.find_index(id)?;
        self.contacts[index].set_address(value)?;
        debug!(target: "rolodex::directory", id, "Address updated");
        Ok(())
    }

    /// All contacts in insertion order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts held
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True if no contacts are held
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Remove every contact
    pub fn clear(&mut self) {
        let dropped = self.contacts.len();
        self.contacts.clear();
        debug!(target: "rolodex::directory", dropped, "Directory cleared");
    }
}
