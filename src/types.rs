//! Core type definitions for rolodex identifiers and query tags.
//!
//! This module defines the contact identifier plus the small tag enums
//! that select which derived index or sort key a query runs against.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Contact identifier (UUID v7 for time-ordering).
///
/// A contact belongs to exactly one address book at a time. The id is
/// assigned on insert and referenced (not owned) by the book's city and
/// state index buckets.
///
/// # Example
/// ```
/// use rolodex::ContactId;
///
/// let id = ContactId::new();
/// println!("Created contact: {}", id);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub Uuid);

impl ContactId {
    /// Creates a new ContactId with a UUID v7 (time-ordered).
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a nil (all zeros) ContactId.
    /// Useful for testing or sentinel values.
    #[inline]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ContactId {
    /// Returns a nil (all zeros) ContactId.
    ///
    /// For a new unique ID, use [`ContactId::new()`].
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selects which location index a lookup, grouping, or count runs against.
///
/// Replaces dynamic field-name dispatch with an explicit tag: every
/// location query names `City` or `State` and routes to the dedicated
/// index, nothing is looked up by string field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKey {
    /// Query the by-city index.
    City,
    /// Query the by-state index.
    State,
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City => write!(f, "city"),
            Self::State => write!(f, "state"),
        }
    }
}

/// Sort key for [`BookRegistry::sort_all`](crate::BookRegistry::sort_all).
///
/// `Zip` compares numerically; the rest compare lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    /// Full name (first + " " + last), lexicographic ascending.
    Name,
    /// City, lexicographic ascending.
    City,
    /// State, lexicographic ascending.
    State,
    /// Zip code, numeric ascending.
    Zip,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::City => write!(f, "city"),
            Self::State => write!(f, "state"),
            Self::Zip => write!(f, "zip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_unique() {
        let a = ContactId::new();
        let b = ContactId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_contact_id_nil_is_default() {
        assert_eq!(ContactId::default(), ContactId::nil());
        assert_ne!(ContactId::new(), ContactId::nil());
    }

    #[test]
    fn test_contact_id_display_roundtrip() {
        let id = ContactId::new();
        let parsed: Uuid = id.to_string().parse().unwrap();
        assert_eq!(ContactId(parsed), id);
    }

    #[test]
    fn test_location_key_display() {
        assert_eq!(LocationKey::City.to_string(), "city");
        assert_eq!(LocationKey::State.to_string(), "state");
    }

    #[test]
    fn test_sort_field_display() {
        assert_eq!(SortField::Name.to_string(), "name");
        assert_eq!(SortField::Zip.to_string(), "zip");
    }
}
