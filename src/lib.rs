//! # Rolodex
//!
//! In-memory address book engine: named contact collections with
//! city/state lookup indexes, cross-collection aggregation, and file
//! export/import.
//!
//! ## Quick Start
//!
//! ```rust
//! use rolodex::{BookRegistry, LocationKey, NewContact, SortField};
//!
//! // One registry per session, constructed by the entry point
//! let mut registry = BookRegistry::new();
//! registry.create_book("Work")?;
//!
//! // Add a contact to a book
//! let book = registry.book_mut("Work").expect("just created");
//! book.add(NewContact {
//!     first_name: "Ganesh".to_string(),
//!     last_name: "Kumar".to_string(),
//!     address: "12 MG Road".to_string(),
//!     city: "Pune".to_string(),
//!     state: "Maharashtra".to_string(),
//!     zip: 411001,
//!     phone: "+919876543210".to_string(),
//!     email: "gk@example.com".to_string(),
//! })?;
//!
//! // Query one book or every book at once
//! assert_eq!(book.find_by_city("pune").len(), 1);
//! assert_eq!(registry.search_all(LocationKey::City, "Pune").len(), 1);
//! assert_eq!(registry.sort_all(SortField::Zip).len(), 1);
//! # Ok::<(), rolodex::RolodexError>(())
//! ```
//!
//! ## Key Concepts
//!
//! ### Address book
//!
//! An **address book** is a named, independent collection of contacts.
//! It keeps an ordered record list (insertion order is the display
//! order) plus two derived indexes, by city and by state, with
//! lower-cased keys. The indexes never drift: every mutation goes
//! through the book's own methods, which re-bucket as needed.
//!
//! ### Registry
//!
//! The **registry** owns all books for a session, keyed by name. It
//! answers cross-book questions — search, grouping, counting, and one
//! global stable sort — by aggregating the books' own indexes on each
//! call. Nothing is cached.
//!
//! ### Validation boundary
//!
//! Field format rules (name, zip, phone, email) are enforced once, by
//! [`validate_new_contact`], before input reaches a book. Inside the
//! collection layer every field is an opaque value; the only rules a
//! book enforces are its own invariants (full-name uniqueness and
//! index consistency).
//!
//! ## Scope
//!
//! Single-user, single-process, synchronous. State lives for the
//! session; the only persistence is explicit export/import via
//! [`export`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod error;
mod types;

pub mod export;

// Domain modules
pub mod book;
pub mod contact;
pub mod registry;

// ============================================================================
// Public API re-exports
// ============================================================================

// Core collection types
pub use book::AddressBook;
pub use registry::BookRegistry;

// Contact domain
pub use contact::{
    is_address_valid, is_email_valid, is_name_valid, is_phone_valid, is_zip_valid,
    validate_contact_update, validate_new_contact, Contact, ContactUpdate, NewContact,
};

// Configuration
pub use config::Config;

// Error handling
pub use error::{ConflictError, NotFoundError, PersistError, Result, RolodexError, ValidationError};

// Core types
pub use types::{ContactId, LocationKey, SortField};

// Export/import
pub use export::{read_contacts, write_contacts, ExportFormat};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Convenient imports for common rolodex usage.
///
/// ```rust
/// use rolodex::prelude::*;
/// ```
pub mod prelude {
    pub use crate::book::AddressBook;
    pub use crate::config::Config;
    pub use crate::contact::{Contact, ContactUpdate, NewContact};
    pub use crate::error::{Result, RolodexError};
    pub use crate::registry::BookRegistry;
    pub use crate::types::{ContactId, LocationKey, SortField};
}
