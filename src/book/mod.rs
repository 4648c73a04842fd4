//! Address book module.
//!
//! An **address book** owns an ordered list of contacts plus two derived
//! indexes (by city, by state, lower-cased keys). The record list is
//! authoritative; the indexes are maintained by the book's own mutation
//! methods and never drift from it.
//!
//! # Invariants
//!
//! - **Uniqueness**: no two contacts in one book share a full name
//!   (case-sensitive, exact match). A duplicate add is rejected and the
//!   original kept.
//! - **Index consistency**: a contact appears in
//!   `by_city[lowercase(city)]` and `by_state[lowercase(state)]` exactly
//!   when it is in the record list, keyed by its *current* city and
//!   state. Edits that change either value re-bucket within the same
//!   call. A bucket whose last member is removed is deleted; lookups on
//!   a missing key return empty, never an error.
//!
//! Mutate books only through these methods — there is no way to reach
//! the record list mutably from outside, so the indexes cannot be
//! bypassed.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, instrument};

use crate::contact::{Contact, ContactUpdate, NewContact};
use crate::error::{ConflictError, NotFoundError, Result};
use crate::types::{ContactId, LocationKey};

/// A named collection of contacts with city/state lookup indexes.
///
/// Insertion order is the canonical display order and is preserved by
/// [`contacts()`](AddressBook::contacts) and within every index bucket.
///
/// # Example
///
/// ```
/// use rolodex::{AddressBook, NewContact};
///
/// let mut book = AddressBook::new();
/// book.add(NewContact {
///     first_name: "Ganesh".to_string(),
///     last_name: "Kumar".to_string(),
///     address: "12 MG Road".to_string(),
///     city: "Pune".to_string(),
///     state: "Maharashtra".to_string(),
///     zip: 411001,
///     phone: "+919876543210".to_string(),
///     email: "gk@example.com".to_string(),
/// })?;
///
/// assert_eq!(book.find_by_city("pune").len(), 1);
/// # Ok::<(), rolodex::RolodexError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct AddressBook {
    /// Authoritative record list, insertion order.
    contacts: Vec<Contact>,

    /// Lower-cased city -> member ids, bucket order = insertion order.
    by_city: HashMap<String, Vec<ContactId>>,

    /// Lower-cased state -> member ids, bucket order = insertion order.
    by_state: HashMap<String, Vec<ContactId>>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact, assigning it a fresh [`ContactId`].
    ///
    /// The caller is expected to have validated field formats already
    /// (see [`validate_new_contact`](crate::contact::validate_new_contact));
    /// this method only enforces the book's own uniqueness rule.
    ///
    /// # Errors
    ///
    /// [`ConflictError::DuplicateContact`] if a contact with the same
    /// full name already exists. The book is unchanged in that case.
    #[instrument(skip(self, contact), fields(name = %contact.full_name()))]
    pub fn add(&mut self, contact: NewContact) -> Result<ContactId> {
        let full_name = contact.full_name();
        if self.contacts.iter().any(|c| c.full_name() == full_name) {
            return Err(ConflictError::duplicate_contact(full_name).into());
        }

        let contact = contact.into_contact();
        let id = contact.id;
        index_insert(&mut self.by_city, &contact.city, id);
        index_insert(&mut self.by_state, &contact.state, id);
        self.contacts.push(contact);

        debug!(%id, "contact added");
        Ok(id)
    }

    /// Returns the full record list in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns true if the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Case-insensitive exact-match lookup against the city index.
    ///
    /// Returns an empty vec (not an error) when the city is unknown.
    pub fn find_by_city(&self, city: &str) -> Vec<&Contact> {
        self.find_by_location(LocationKey::City, city)
    }

    /// Case-insensitive exact-match lookup against the state index.
    ///
    /// Returns an empty vec (not an error) when the state is unknown.
    pub fn find_by_state(&self, state: &str) -> Vec<&Contact> {
        self.find_by_location(LocationKey::State, state)
    }

    /// Lookup against the index selected by `key`.
    pub fn find_by_location(&self, key: LocationKey, value: &str) -> Vec<&Contact> {
        let index = match key {
            LocationKey::City => &self.by_city,
            LocationKey::State => &self.by_state,
        };
        match index.get(&value.to_lowercase()) {
            Some(ids) => ids.iter().map(|id| self.expect_contact(*id)).collect(),
            None => Vec::new(),
        }
    }

    /// Edits the first contact (insertion order) whose first name
    /// matches, replacing every mutable field with `update`.
    ///
    /// First-match-by-insertion-order is the documented resolution when
    /// several contacts share a first name; disambiguate by editing the
    /// full name first if that is not the contact you mean.
    ///
    /// If the update changes city or state, the contact is removed from
    /// its old index bucket(s) and inserted into the new one(s) as part
    /// of this call.
    ///
    /// # Errors
    ///
    /// - [`NotFoundError::Contact`] if no first name matches (no change).
    /// - [`ConflictError::DuplicateContact`] if the new full name would
    ///   collide with a *different* contact in this book (no change).
    #[instrument(skip(self, update), fields(first_name))]
    pub fn edit(&mut self, first_name: &str, update: ContactUpdate) -> Result<ContactId> {
        let pos = self
            .position_by_first_name(first_name)
            .ok_or_else(|| NotFoundError::contact(first_name))?;

        let new_full_name = update.full_name();
        let collides = self
            .contacts
            .iter()
            .enumerate()
            .any(|(i, c)| i != pos && c.full_name() == new_full_name);
        if collides {
            return Err(ConflictError::duplicate_contact(new_full_name).into());
        }

        let id = self.contacts[pos].id;
        let old_city = self.contacts[pos].city.clone();
        let old_state = self.contacts[pos].state.clone();

        // Re-bucket before the edit is considered complete.
        if !old_city.eq_ignore_ascii_case(&update.city) {
            index_remove(&mut self.by_city, &old_city, id);
            index_insert(&mut self.by_city, &update.city, id);
        }
        if !old_state.eq_ignore_ascii_case(&update.state) {
            index_remove(&mut self.by_state, &old_state, id);
            index_insert(&mut self.by_state, &update.state, id);
        }

        self.contacts[pos].apply_update(update);

        debug!(%id, "contact edited");
        Ok(id)
    }

    /// Deletes the first contact (insertion order) whose first name
    /// matches, removing it from the record list and both indexes.
    ///
    /// Returns the removed contact.
    ///
    /// # Errors
    ///
    /// [`NotFoundError::Contact`] if no first name matches.
    #[instrument(skip(self), fields(first_name))]
    pub fn delete(&mut self, first_name: &str) -> Result<Contact> {
        let pos = self
            .position_by_first_name(first_name)
            .ok_or_else(|| NotFoundError::contact(first_name))?;

        let contact = self.contacts.remove(pos);
        index_remove(&mut self.by_city, &contact.city, contact.id);
        index_remove(&mut self.by_state, &contact.state, contact.id);

        debug!(id = %contact.id, "contact deleted");
        Ok(contact)
    }

    /// Read-only grouping view of the city index: lower-cased city ->
    /// members in insertion order, keys sorted.
    pub fn city_index(&self) -> BTreeMap<&str, Vec<&Contact>> {
        self.index_view(LocationKey::City)
    }

    /// Read-only grouping view of the state index: lower-cased state ->
    /// members in insertion order, keys sorted.
    pub fn state_index(&self) -> BTreeMap<&str, Vec<&Contact>> {
        self.index_view(LocationKey::State)
    }

    /// Grouping view of the index selected by `key`.
    pub fn index_view(&self, key: LocationKey) -> BTreeMap<&str, Vec<&Contact>> {
        let index = match key {
            LocationKey::City => &self.by_city,
            LocationKey::State => &self.by_state,
        };
        index
            .iter()
            .map(|(bucket, ids)| {
                let members = ids.iter().map(|id| self.expect_contact(*id)).collect();
                (bucket.as_str(), members)
            })
            .collect()
    }

    /// Contacts sorted by first name (lexicographic ascending). The
    /// book's own order is untouched.
    pub fn sorted_by_first_name(&self) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        sorted
    }

    /// Replaces the book's contents with imported records, rebuilding
    /// both indexes from scratch.
    ///
    /// Duplicate full names within `contacts` keep the first occurrence
    /// and drop the rest, applying the same uniqueness rule as
    /// [`add`](AddressBook::add). Returns how many records were kept.
    #[instrument(skip(self, contacts), fields(incoming = contacts.len()))]
    pub fn replace_all(&mut self, contacts: Vec<Contact>) -> usize {
        self.contacts.clear();
        self.by_city.clear();
        self.by_state.clear();

        for contact in contacts {
            let full_name = contact.full_name();
            if self.contacts.iter().any(|c| c.full_name() == full_name) {
                debug!(name = %full_name, "dropping duplicate on import");
                continue;
            }
            index_insert(&mut self.by_city, &contact.city, contact.id);
            index_insert(&mut self.by_state, &contact.state, contact.id);
            self.contacts.push(contact);
        }

        self.contacts.len()
    }

    fn position_by_first_name(&self, first_name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.first_name == first_name)
    }

    /// Resolves an indexed id against the record list.
    ///
    /// Every id in a bucket refers to a live contact (index consistency
    /// invariant), so a miss here is a bug in this module.
    fn expect_contact(&self, id: ContactId) -> &Contact {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .unwrap_or_else(|| unreachable!("index refers to missing contact {id}"))
    }
}

/// Inserts `id` into the bucket for `key` (lower-cased), creating the
/// bucket if needed.
fn index_insert(index: &mut HashMap<String, Vec<ContactId>>, key: &str, id: ContactId) {
    index.entry(key.to_lowercase()).or_default().push(id);
}

/// Removes `id` from the bucket for `key` (lower-cased), dropping the
/// bucket when it empties.
fn index_remove(index: &mut HashMap<String, Vec<ContactId>>, key: &str, id: ContactId) {
    let bucket_key = key.to_lowercase();
    if let Some(bucket) = index.get_mut(&bucket_key) {
        bucket.retain(|member| *member != id);
        if bucket.is_empty() {
            index.remove(&bucket_key);
        }
    }
}
