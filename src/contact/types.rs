//! Type definitions for contacts.
//!
//! A **contact** is one person's data: name, postal address fields,
//! phone, and email. The collection layer treats every field as an
//! opaque value; format rules are enforced once, at the validation
//! boundary ([`crate::contact::validate_new_contact`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ContactId;

/// A contact stored in an address book.
///
/// # Identity
///
/// The duplicate-detection key is [`full_name()`](Contact::full_name)
/// (case-sensitive, exact match): no two contacts in the same book may
/// share a full name. The `id` is a storage handle, not the identity
/// rule — it is referenced by the book's city and state index buckets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier (UUID v7), assigned on insert.
    pub id: ContactId,

    /// Given name. Non-empty; starts with an uppercase letter.
    pub first_name: String,

    /// Family name. Same format rule as `first_name`.
    pub last_name: String,

    /// Street address.
    pub address: String,

    /// City. Indexed case-insensitively by the owning book.
    pub city: String,

    /// State. Indexed case-insensitively by the owning book.
    pub state: String,

    /// 6-digit postal code, first digit 1-9.
    pub zip: u32,

    /// Phone number with country code prefix (`+91` + 10 digits).
    pub phone: String,

    /// Email address.
    pub email: String,
}

impl Contact {
    /// Returns `first_name + " " + last_name`.
    ///
    /// This is the duplicate-detection key and the name-sort key.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replaces every mutable field with the values from `update` in
    /// one step.
    ///
    /// The `id` is untouched. The owning book is responsible for any
    /// re-indexing the new city/state values require; call
    /// [`AddressBook::edit`](crate::AddressBook::edit) instead of this
    /// method unless you hold the contact outside a book.
    pub fn apply_update(&mut self, update: ContactUpdate) {
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.address = update.address;
        self.city = update.city;
        self.state = update.state;
        self.zip = update.zip;
        self.phone = update.phone;
        self.email = update.email;
    }

    /// Returns true if both contacts have identical field values,
    /// ignoring the id.
    ///
    /// Used by import round-trip checks, where ids are regenerated for
    /// formats that do not carry them (text, CSV).
    pub fn same_fields(&self, other: &Contact) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.address == other.address
            && self.city == other.city
            && self.state == other.state
            && self.zip == other.zip
            && self.phone == other.phone
            && self.email == other.email
    }
}

impl fmt::Display for Contact {
    /// Deterministic one-line rendering of every field.
    ///
    /// Used for presentation and the text export format, never for
    /// equality or hashing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {} - {:06}, {}, {}",
            self.full_name(),
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }
}

/// Input for adding a contact to a book.
///
/// Same fields as [`Contact`] minus the id, which the book assigns on
/// insert. Run through [`validate_new_contact`](crate::contact::validate_new_contact)
/// before handing it to [`AddressBook::add`](crate::AddressBook::add);
/// the collection layer itself does not re-check formats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// 6-digit postal code.
    pub zip: u32,
    /// Phone number with country code prefix.
    pub phone: String,
    /// Email address.
    pub email: String,
}

impl NewContact {
    /// Returns `first_name + " " + last_name`, the duplicate key this
    /// draft would claim on insert.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Promotes the draft to a [`Contact`] with a fresh id.
    pub(crate) fn into_contact(self) -> Contact {
        Contact {
            id: ContactId::new(),
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// Full replacement set for a contact edit.
///
/// Edits are whole-record: every mutable field is supplied and applied
/// atomically by [`AddressBook::edit`](crate::AddressBook::edit). There
/// is no partial update; the caller (typically the CLI, which re-prompts
/// for each field) builds the complete new value first, so a half-entered
/// edit never touches the book.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdate {
    /// New given name.
    pub first_name: String,
    /// New family name.
    pub last_name: String,
    /// New street address.
    pub address: String,
    /// New city.
    pub city: String,
    /// New state.
    pub state: String,
    /// New 6-digit postal code.
    pub zip: u32,
    /// New phone number.
    pub phone: String,
    /// New email address.
    pub email: String,
}

impl ContactUpdate {
    /// Returns the full name this update would give the contact.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<Contact> for ContactUpdate {
    /// An update that reproduces the contact's current fields.
    /// Convenient starting point for edit flows that change one field.
    fn from(c: Contact) -> Self {
        Self {
            first_name: c.first_name,
            last_name: c.last_name,
            address: c.address,
            city: c.city,
            state: c.state,
            zip: c.zip,
            phone: c.phone,
            email: c.email,
        }
    }
}
