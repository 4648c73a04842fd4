//! Field validators for contact input.
//!
//! Format rules live here and only here: once a [`NewContact`] passes
//! [`validate_new_contact`], the collection layer trusts every field as
//! an opaque value. The same name rule doubles as the book-name rule in
//! [`crate::registry::BookRegistry::create_book`].
//!
//! Each validator is an anchored regex compiled once via `once_cell`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::types::{ContactUpdate, NewContact};
use crate::error::{RolodexError, ValidationError};

/// First char uppercase, at least two more letters, letters only.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z]{2,}$").expect("valid name regex"));

/// Word chars, whitespace, and common street punctuation; min length 3.
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s#,/.-]{3,}$").expect("valid address regex"));

/// Exactly 6 digits, no leading zero.
static ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("valid zip regex"));

/// Country code +91 followed by exactly 10 digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+91[0-9]{10}$").expect("valid phone regex"));

/// Local part, @, dotted domain, TLD of 2+ letters.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex"));

/// Returns true if `name` is a valid person or book name.
///
/// Rule: starts with an uppercase A-Z, followed by at least two more
/// letters (upper or lower), nothing else. Minimum total length 3.
pub fn is_name_valid(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Returns true if `address` is at least 3 chars of word characters,
/// whitespace, or street punctuation (`# , / . -`).
pub fn is_address_valid(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// Returns true if `zip` is exactly 6 digits with a non-zero first digit.
pub fn is_zip_valid(zip: &str) -> bool {
    ZIP_RE.is_match(zip)
}

/// Returns true if `phone` is `+91` followed by exactly 10 digits.
pub fn is_phone_valid(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Returns true if `email` has a local part, an `@`, a dotted domain,
/// and a TLD of at least 2 letters.
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Numeric form of the zip rule: 6 digits, first digit 1-9.
fn is_zip_in_range(zip: u32) -> bool {
    (100_000..=999_999).contains(&zip)
}

/// Validates every field of a [`NewContact`] before it reaches a book.
///
/// # Rules
///
/// - `first_name` / `last_name`: uppercase start, 3+ letters
/// - `address`: 3+ chars of word/space/street punctuation
/// - `zip`: 100000-999999 (6 digits, no leading zero)
/// - `phone`: `+91` + 10 digits
/// - `email`: local part, `@`, dotted domain, 2+ letter TLD
///
/// Returns the first failing field as a
/// [`ValidationError::InvalidField`].
pub fn validate_new_contact(contact: &NewContact) -> Result<(), RolodexError> {
    validate_fields(
        &contact.first_name,
        &contact.last_name,
        &contact.address,
        contact.zip,
        &contact.phone,
        &contact.email,
    )
}

/// Validates a [`ContactUpdate`] with the same rules as a new contact.
pub fn validate_contact_update(update: &ContactUpdate) -> Result<(), RolodexError> {
    validate_fields(
        &update.first_name,
        &update.last_name,
        &update.address,
        update.zip,
        &update.phone,
        &update.email,
    )
}

fn validate_fields(
    first_name: &str,
    last_name: &str,
    address: &str,
    zip: u32,
    phone: &str,
    email: &str,
) -> Result<(), RolodexError> {
    if first_name.is_empty() {
        return Err(ValidationError::required_field("first_name").into());
    }
    if !is_name_valid(first_name) {
        return Err(ValidationError::invalid_field(
            "first_name",
            "must start with an uppercase letter and have at least 3 letters",
        )
        .into());
    }

    if last_name.is_empty() {
        return Err(ValidationError::required_field("last_name").into());
    }
    if !is_name_valid(last_name) {
        return Err(ValidationError::invalid_field(
            "last_name",
            "must start with an uppercase letter and have at least 3 letters",
        )
        .into());
    }

    if !is_address_valid(address) {
        return Err(ValidationError::invalid_field(
            "address",
            "must be at least 3 characters (letters, digits, spaces, #,/.-)",
        )
        .into());
    }

    if !is_zip_in_range(zip) {
        return Err(ValidationError::invalid_field(
            "zip",
            format!("must be a 6-digit code with no leading zero, got {}", zip),
        )
        .into());
    }

    if !is_phone_valid(phone) {
        return Err(ValidationError::invalid_field(
            "phone",
            "must be +91 followed by exactly 10 digits",
        )
        .into());
    }

    if !is_email_valid(email) {
        return Err(ValidationError::invalid_field(
            "email",
            "must look like local@domain.tld",
        )
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> NewContact {
        NewContact {
            first_name: "Ganesh".to_string(),
            last_name: "Kumar".to_string(),
            address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            zip: 411001,
            phone: "+919876543210".to_string(),
            email: "ganesh.kumar@example.com".to_string(),
        }
    }

    #[test]
    fn test_name_boundaries() {
        assert!(is_name_valid("Ganesh"));
        assert!(is_name_valid("McArthur")); // interior uppercase allowed
        assert!(!is_name_valid("Al")); // too short
        assert!(!is_name_valid("ganesh")); // lowercase start
        assert!(!is_name_valid("Al3x")); // digit
        assert!(!is_name_valid("")); // empty
        assert!(!is_name_valid("Ana Maria")); // space
    }

    #[test]
    fn test_address_rule() {
        assert!(is_address_valid("12 MG Road"));
        assert!(is_address_valid("Flat #4, 7/B Lane-2"));
        assert!(!is_address_valid("ab")); // too short
        assert!(!is_address_valid("12 MG Road; apt 3")); // semicolon
    }

    #[test]
    fn test_zip_rule() {
        assert!(is_zip_valid("411001"));
        assert!(!is_zip_valid("41100")); // 5 digits
        assert!(!is_zip_valid("4110011")); // 7 digits
        assert!(!is_zip_valid("011001")); // leading zero
        assert!(!is_zip_valid("41100a"));
    }

    #[test]
    fn test_phone_rule() {
        assert!(is_phone_valid("+919876543210"));
        assert!(!is_phone_valid("9876543210")); // no country code
        assert!(!is_phone_valid("+91987654321")); // 9 digits
        assert!(!is_phone_valid("+9198765432100")); // 11 digits
        assert!(!is_phone_valid("+129876543210")); // wrong country code
    }

    #[test]
    fn test_email_rule() {
        assert!(is_email_valid("ganesh.kumar@example.com"));
        assert!(is_email_valid("g-k_1@mail.example.co"));
        assert!(!is_email_valid("ganesh@example")); // no TLD
        assert!(!is_email_valid("ganesh.example.com")); // no @
        assert!(!is_email_valid("@example.com")); // empty local part
        assert!(!is_email_valid("ganesh@example.c")); // 1-letter TLD
    }

    #[test]
    fn test_valid_contact_passes() {
        assert!(validate_new_contact(&valid_contact()).is_ok());
    }

    #[test]
    fn test_empty_first_name_rejected() {
        let mut contact = valid_contact();
        contact.first_name = String::new();
        let err = validate_new_contact(&contact).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("first_name"));
    }

    #[test]
    fn test_lowercase_last_name_rejected() {
        let mut contact = valid_contact();
        contact.last_name = "kumar".to_string();
        let err = validate_new_contact(&contact).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("last_name"));
    }

    #[test]
    fn test_short_zip_rejected() {
        let mut contact = valid_contact();
        contact.zip = 41100;
        let err = validate_new_contact(&contact).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("zip"));
    }

    #[test]
    fn test_zip_boundary_values() {
        let mut contact = valid_contact();

        contact.zip = 100_000;
        assert!(validate_new_contact(&contact).is_ok());

        contact.zip = 999_999;
        assert!(validate_new_contact(&contact).is_ok());

        contact.zip = 99_999;
        assert!(validate_new_contact(&contact).is_err());

        contact.zip = 1_000_000;
        assert!(validate_new_contact(&contact).is_err());
    }

    #[test]
    fn test_bad_phone_rejected() {
        let mut contact = valid_contact();
        contact.phone = "9876543210".to_string();
        let err = validate_new_contact(&contact).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut contact = valid_contact();
        contact.email = "not-an-email".to_string();
        let err = validate_new_contact(&contact).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_update_validated_with_same_rules() {
        let update = ContactUpdate {
            first_name: "al".to_string(), // invalid
            last_name: "Kumar".to_string(),
            address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            zip: 411001,
            phone: "+919876543210".to_string(),
            email: "a@example.com".to_string(),
        };
        assert!(validate_contact_update(&update).is_err());
    }
}
