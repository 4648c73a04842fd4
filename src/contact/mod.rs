//! Contact management module.
//!
//! A **contact** is the core data type in rolodex — one person's name,
//! postal address, phone, and email, owned by exactly one
//! [`AddressBook`](crate::AddressBook) at a time.
//!
//! # Validation boundary
//!
//! Format rules are enforced here, once, before a contact reaches a
//! book: run [`validate_new_contact`] (or [`validate_contact_update`]
//! for edits) on input assembled from an untrusted source. The
//! collection layer itself never re-validates formats; it only enforces
//! its own invariants (full-name uniqueness, index consistency).

pub mod types;
pub mod validation;

pub use types::{Contact, ContactUpdate, NewContact};
pub use validation::{
    is_address_valid, is_email_valid, is_name_valid, is_phone_valid, is_zip_valid,
    validate_contact_update, validate_new_contact,
};
