//! Book registry module.
//!
//! The **registry** owns every address book for a session, keyed by
//! book name. It is constructed once by the entry point and passed down
//! to whatever needs it — there is no ambient global.
//!
//! Beyond create/get/delete, the registry answers the cross-book
//! questions: search one city or state across every book, group or
//! count all contacts by city/state, and produce one stable-sorted
//! sequence of every contact in the session.
//!
//! Books are held in a `BTreeMap`, so every cross-book operation visits
//! them in lexicographic name order. Callers should only rely on the
//! order being consistent within a run, but in practice it is fully
//! deterministic and the tests here pin it.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::book::AddressBook;
use crate::contact::{is_name_valid, Contact};
use crate::error::{ConflictError, NotFoundError, Result, ValidationError};
use crate::types::{LocationKey, SortField};

/// Owner of all address books in a session.
///
/// # Example
///
/// ```
/// use rolodex::{BookRegistry, LocationKey};
///
/// let mut registry = BookRegistry::new();
/// registry.create_book("Work")?;
/// registry.create_book("Home")?;
///
/// assert_eq!(registry.book_names(), vec!["Home", "Work"]);
/// assert!(registry.search_all(LocationKey::City, "Pune").is_empty());
/// # Ok::<(), rolodex::RolodexError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct BookRegistry {
    books: BTreeMap<String, AddressBook>,
}

impl BookRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty book under `name`.
    ///
    /// A book name must pass the same rule as a person's given name:
    /// uppercase first letter, at least 3 letters, letters only.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidField`] for an invalid name.
    /// - [`ConflictError::BookExists`] if the name is taken.
    #[instrument(skip(self))]
    pub fn create_book(&mut self, name: &str) -> Result<()> {
        if !is_name_valid(name) {
            return Err(ValidationError::invalid_field(
                "book name",
                "must start with an uppercase letter and have at least 3 letters",
            )
            .into());
        }
        if self.books.contains_key(name) {
            return Err(ConflictError::book_exists(name).into());
        }

        self.books.insert(name.to_string(), AddressBook::new());
        info!(book = name, "book created");
        Ok(())
    }

    /// Returns the book registered under `name`, if any.
    pub fn book(&self, name: &str) -> Option<&AddressBook> {
        self.books.get(name)
    }

    /// Mutable access to the book registered under `name`, if any.
    pub fn book_mut(&mut self, name: &str) -> Option<&mut AddressBook> {
        self.books.get_mut(name)
    }

    /// Removes the book registered under `name`, discarding its contacts.
    ///
    /// # Errors
    ///
    /// [`NotFoundError::Book`] if no such book exists.
    #[instrument(skip(self))]
    pub fn delete_book(&mut self, name: &str) -> Result<()> {
        match self.books.remove(name) {
            Some(book) => {
                info!(book = name, contacts = book.len(), "book deleted");
                Ok(())
            }
            None => Err(NotFoundError::book(name).into()),
        }
    }

    /// Registered book names in lexicographic order.
    pub fn book_names(&self) -> Vec<&str> {
        self.books.keys().map(String::as_str).collect()
    }

    /// Number of registered books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if no books are registered.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Total contacts across every book.
    pub fn total_contacts(&self) -> usize {
        self.books.values().map(AddressBook::len).sum()
    }

    /// Searches every book's index for `value`, case-insensitively.
    ///
    /// Results are `(book name, contact)` pairs: books in name order,
    /// contacts in bucket (insertion) order within each book. An
    /// unknown key yields an empty vec.
    pub fn search_all(&self, key: LocationKey, value: &str) -> Vec<(&str, &Contact)> {
        let mut results = Vec::new();
        for (name, book) in &self.books {
            for contact in book.find_by_location(key, value) {
                results.push((name.as_str(), contact));
            }
        }
        results
    }

    /// Groups every contact in the session by the selected location.
    ///
    /// A fresh mapping is computed on each call from the books' own
    /// indexes; nothing is cached. Keys are lower-cased; members are
    /// `(book name, contact)` pairs in the same order as
    /// [`search_all`](BookRegistry::search_all).
    pub fn group_all(&self, key: LocationKey) -> BTreeMap<String, Vec<(&str, &Contact)>> {
        let mut groups: BTreeMap<String, Vec<(&str, &Contact)>> = BTreeMap::new();
        for (name, book) in &self.books {
            for (bucket, members) in book.index_view(key) {
                let group = groups.entry(bucket.to_string()).or_default();
                for contact in members {
                    group.push((name.as_str(), contact));
                }
            }
        }
        groups
    }

    /// Counts contacts per city or state across every book.
    ///
    /// Derived from [`group_all`](BookRegistry::group_all); keys are
    /// lower-cased. An empty registry yields an empty mapping.
    pub fn count_all(&self, key: LocationKey) -> BTreeMap<String, usize> {
        self.group_all(key)
            .into_iter()
            .map(|(bucket, members)| (bucket, members.len()))
            .collect()
    }

    /// Collects every contact from every book and sorts by `field`.
    ///
    /// `Zip` compares numerically, `Name` by full name, `City`/`State`
    /// by the raw field value, all ascending. The sort is stable: ties
    /// keep their input order (book name order, then insertion order
    /// within a book).
    ///
    /// An empty registry returns an empty vec.
    #[instrument(skip(self))]
    pub fn sort_all(&self, field: SortField) -> Vec<(&str, &Contact)> {
        let mut all: Vec<(&str, &Contact)> = self
            .books
            .iter()
            .flat_map(|(name, book)| {
                book.contacts()
                    .iter()
                    .map(move |contact| (name.as_str(), contact))
            })
            .collect();

        if all.is_empty() {
            debug!("sort over empty registry");
            return all;
        }

        all.sort_by(|(_, a), (_, b)| compare_by(field, a, b));
        all
    }
}

fn compare_by(field: SortField, a: &Contact, b: &Contact) -> Ordering {
    match field {
        SortField::Name => a.full_name().cmp(&b.full_name()),
        SortField::City => a.city.cmp(&b.city),
        SortField::State => a.state.cmp(&b.state),
        SortField::Zip => a.zip.cmp(&b.zip),
    }
}
