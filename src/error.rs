//! Error types for rolodex.
//!
//! Rolodex uses a hierarchical error system:
//! - `RolodexError` is the top-level error returned by all public APIs
//! - Specific error types (`ValidationError`, `ConflictError`,
//!   `NotFoundError`, `PersistError`) provide detail
//!
//! Every error in this crate is recoverable at the call site: a duplicate
//! contact, a missing book, or a malformed import row never aborts the
//! process. Callers match on the category (or use the `is_*` predicates)
//! and decide how to surface the outcome.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rolodex operations.
pub type Result<T> = std::result::Result<T, RolodexError>;

/// Top-level error enum for all rolodex operations.
///
/// This is the only error type returned by public APIs.
/// Use pattern matching to handle specific error cases.
#[derive(Debug, Error)]
pub enum RolodexError {
    /// Input validation error (bad name, zip, phone, email format).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A uniqueness rule was violated (duplicate contact or book name).
    #[error("Conflict: {0}")]
    Conflict(#[from] ConflictError),

    /// Requested entity not found.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Export/import error (format, parse).
    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),

    /// General I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RolodexError {
    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a conflict (duplicate) error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Returns true if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if this is an export/import error.
    pub fn is_persist(&self) -> bool {
        matches!(self, Self::Persist(_))
    }
}

/// Validation errors for input data.
///
/// These errors indicate problems with data provided by the caller.
/// The collection layer trusts its inputs; validation happens once at
/// the boundary, in [`crate::contact::validate_new_contact`] and
/// [`crate::registry::BookRegistry::create_book`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field has an invalid value.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Name of the invalid field.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// A required field is missing or empty.
    #[error("Required field missing: {field}")]
    RequiredField {
        /// Name of the missing field.
        field: String,
    },
}

impl ValidationError {
    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a required field error.
    pub fn required_field(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }
}

/// Uniqueness conflicts.
///
/// Both variants preserve the existing entity: a rejected add/create is
/// a no-op on the collection.
#[derive(Debug, Error)]
pub enum ConflictError {
    /// A contact with the same full name already exists in the book.
    #[error("Duplicate contact: '{0}' already exists in this book")]
    DuplicateContact(String),

    /// A book with this name is already registered.
    #[error("Book already exists: {0}")]
    BookExists(String),
}

impl ConflictError {
    /// Creates a duplicate contact error from the offending full name.
    pub fn duplicate_contact(full_name: impl Into<String>) -> Self {
        Self::DuplicateContact(full_name.into())
    }

    /// Creates a book-exists error.
    pub fn book_exists(name: impl Into<String>) -> Self {
        Self::BookExists(name.into())
    }
}

/// Not found errors for specific entity types.
#[derive(Debug, Error)]
pub enum NotFoundError {
    /// No contact with the given first name in the book.
    #[error("Contact not found: {0}")]
    Contact(String),

    /// No book registered under the given name.
    #[error("Book not found: {0}")]
    Book(String),
}

impl NotFoundError {
    /// Creates a contact not found error.
    pub fn contact(first_name: impl Into<String>) -> Self {
        Self::Contact(first_name.into())
    }

    /// Creates a book not found error.
    pub fn book(name: impl Into<String>) -> Self {
        Self::Book(name.into())
    }
}

/// Export/import errors.
#[derive(Debug, Error)]
pub enum PersistError {
    /// File extension is not one of .txt, .json, .csv.
    #[error("Unsupported file format: {0} (use .txt, .json, or .csv)")]
    UnsupportedFormat(PathBuf),

    /// A line or row in the input could not be parsed.
    #[error("Malformed record at line {line}: {reason}")]
    Malformed {
        /// 1-based line number in the input file.
        line: usize,
        /// What went wrong.
        reason: String,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV (de)serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PersistError {
    /// Creates a malformed-record error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

// Direct conversions to RolodexError so `?` works on serde_json/csv
// results without a manual PersistError hop.
impl From<serde_json::Error> for RolodexError {
    fn from(err: serde_json::Error) -> Self {
        RolodexError::Persist(PersistError::from(err))
    }
}

impl From<csv::Error> for RolodexError {
    fn from(err: csv::Error) -> Self {
        RolodexError::Persist(PersistError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::invalid_field("zip", "must be 6 digits");
        assert_eq!(err.to_string(), "Invalid field 'zip': must be 6 digits");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = ConflictError::duplicate_contact("Ganesh Kumar");
        assert_eq!(
            err.to_string(),
            "Duplicate contact: 'Ganesh Kumar' already exists in this book"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = NotFoundError::book("Work");
        assert_eq!(err.to_string(), "Book not found: Work");
    }

    #[test]
    fn test_persist_error_display() {
        let err = PersistError::malformed(3, "expected 8 fields, got 5");
        assert_eq!(
            err.to_string(),
            "Malformed record at line 3: expected 8 fields, got 5"
        );
    }

    #[test]
    fn test_is_conflict() {
        let err: RolodexError = ConflictError::book_exists("Work").into();
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        let err: RolodexError = ValidationError::required_field("first_name").into();
        assert!(err.is_validation());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_error_conversion_chain() {
        // Simulate a not-found error propagating up
        fn inner() -> Result<()> {
            Err(NotFoundError::contact("Ganesh"))?
        }

        let result = inner();
        assert!(result.is_err());
        assert!(result.unwrap_err().is_not_found());
    }
}
