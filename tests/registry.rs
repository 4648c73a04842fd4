//! Integration tests for cross-book aggregation: registry lifecycle,
//! search/group/count across all books, and the global stable sort.

use rolodex::{BookRegistry, LocationKey, NewContact, SortField};

fn contact(first: &str, last: &str, city: &str, state: &str, zip: u32) -> NewContact {
    NewContact {
        first_name: first.to_string(),
        last_name: last.to_string(),
        address: "12 MG Road".to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip,
        phone: "+919876543210".to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
    }
}

fn add(registry: &mut BookRegistry, book: &str, c: NewContact) {
    registry.book_mut(book).unwrap().add(c).unwrap();
}

// ============================================================================
// Registry lifecycle
// ============================================================================

#[test]
fn test_book_names_follow_name_rule() {
    let mut registry = BookRegistry::new();

    assert!(registry.create_book("Work").is_ok());
    assert!(registry.create_book("Al").unwrap_err().is_validation());
    assert!(registry.create_book("work").unwrap_err().is_validation());
    assert!(registry.create_book("W0rk").unwrap_err().is_validation());

    assert_eq!(registry.book_names(), vec!["Work"]);
}

#[test]
fn test_duplicate_book_name_rejected() {
    let mut registry = BookRegistry::new();
    registry.create_book("Work").unwrap();

    // Existing book keeps its contacts through the failed create
    add(&mut registry, "Work", contact("Ganesh", "Kumar", "Pune", "Maharashtra", 411001));
    assert!(registry.create_book("Work").unwrap_err().is_conflict());
    assert_eq!(registry.book("Work").unwrap().len(), 1);
}

#[test]
fn test_delete_book_discards_contacts() {
    let mut registry = BookRegistry::new();
    registry.create_book("Work").unwrap();
    add(&mut registry, "Work", contact("Ganesh", "Kumar", "Pune", "Maharashtra", 411001));

    registry.delete_book("Work").unwrap();

    assert!(registry.book("Work").is_none());
    assert!(registry.search_all(LocationKey::City, "Pune").is_empty());
}

// ============================================================================
// Cross-book aggregation
// ============================================================================

#[test]
fn test_search_all_finds_contacts_in_every_book() {
    let mut registry = BookRegistry::new();
    registry.create_book("Work").unwrap();
    registry.create_book("Home").unwrap();
    add(&mut registry, "Work", contact("Ganesh", "Kumar", "Mumbai", "Maharashtra", 400001));
    add(&mut registry, "Home", contact("Asha", "Patil", "Mumbai", "Maharashtra", 400002));
    add(&mut registry, "Home", contact("Ravi", "Singh", "Delhi", "Delhi", 110001));

    let hits = registry.search_all(LocationKey::City, "Mumbai");
    assert_eq!(hits.len(), 2);

    let books: Vec<&str> = hits.iter().map(|(book, _)| *book).collect();
    assert_eq!(books, vec!["Home", "Work"]); // name order
}

#[test]
fn test_count_all_by_city_spans_books() {
    let mut registry = BookRegistry::new();
    registry.create_book("Work").unwrap();
    registry.create_book("Home").unwrap();
    add(&mut registry, "Work", contact("Ganesh", "Kumar", "Mumbai", "Maharashtra", 400001));
    add(&mut registry, "Home", contact("Asha", "Patil", "mumbai", "Maharashtra", 400002));

    let counts = registry.count_all(LocationKey::City);
    // Keys are lower-cased, so both spellings land in one bucket
    assert_eq!(counts["mumbai"], 2);
    assert_eq!(counts.len(), 1);
}

#[test]
fn test_group_all_by_state_recomputed_after_mutation() {
    let mut registry = BookRegistry::new();
    registry.create_book("Work").unwrap();
    add(&mut registry, "Work", contact("Ganesh", "Kumar", "Pune", "Maharashtra", 411001));

    assert_eq!(registry.group_all(LocationKey::State)["maharashtra"].len(), 1);

    registry.book_mut("Work").unwrap().delete("Ganesh").unwrap();

    // Derived fresh from the indexes, not cached
    assert!(registry.group_all(LocationKey::State).is_empty());
}

#[test]
fn test_empty_registry_aggregates_are_empty() {
    let registry = BookRegistry::new();
    assert!(registry.search_all(LocationKey::City, "Mumbai").is_empty());
    assert!(registry.group_all(LocationKey::City).is_empty());
    assert!(registry.count_all(LocationKey::State).is_empty());
    assert!(registry.sort_all(SortField::Name).is_empty());
}

// ============================================================================
// Global sort
// ============================================================================

#[test]
fn test_sort_all_by_zip_is_numeric_ascending() {
    let mut registry = BookRegistry::new();
    registry.create_book("Work").unwrap();
    registry.create_book("Home").unwrap();
    add(&mut registry, "Work", contact("Ganesh", "Kumar", "Pune", "Maharashtra", 500001));
    add(&mut registry, "Home", contact("Asha", "Patil", "Mumbai", "Maharashtra", 100002));
    add(&mut registry, "Work", contact("Ravi", "Singh", "Delhi", "Delhi", 300003));

    let zips: Vec<u32> = registry
        .sort_all(SortField::Zip)
        .iter()
        .map(|(_, c)| c.zip)
        .collect();
    assert_eq!(zips, vec![100002, 300003, 500001]);
}

#[test]
fn test_sort_all_ties_keep_input_order() {
    let mut registry = BookRegistry::new();
    registry.create_book("Home").unwrap();
    registry.create_book("Work").unwrap();
    // Same zip everywhere; input order is book name order then insertion order
    add(&mut registry, "Home", contact("Ravi", "Singh", "Delhi", "Delhi", 400001));
    add(&mut registry, "Home", contact("Asha", "Patil", "Pune", "Maharashtra", 400001));
    add(&mut registry, "Work", contact("Ganesh", "Kumar", "Mumbai", "Maharashtra", 400001));

    let order: Vec<(&str, String)> = registry
        .sort_all(SortField::Zip)
        .iter()
        .map(|(book, c)| (*book, c.first_name.clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Home", "Ravi".to_string()),
            ("Home", "Asha".to_string()),
            ("Work", "Ganesh".to_string()),
        ]
    );
}

#[test]
fn test_sort_all_by_name_uses_full_name() {
    let mut registry = BookRegistry::new();
    registry.create_book("Work").unwrap();
    add(&mut registry, "Work", contact("Ganesh", "Patil", "Pune", "Maharashtra", 411001));
    add(&mut registry, "Work", contact("Ganesh", "Kumar", "Pune", "Maharashtra", 411002));

    let names: Vec<String> = registry
        .sort_all(SortField::Name)
        .iter()
        .map(|(_, c)| c.full_name())
        .collect();
    // Same first name; last name breaks the tie via the full-name key
    assert_eq!(names, vec!["Ganesh Kumar", "Ganesh Patil"]);
}

#[test]
fn test_sort_all_by_city_lexicographic() {
    let mut registry = BookRegistry::new();
    registry.create_book("Work").unwrap();
    add(&mut registry, "Work", contact("Ganesh", "Kumar", "Pune", "Maharashtra", 411001));
    add(&mut registry, "Work", contact("Asha", "Patil", "Delhi", "Delhi", 110001));
    add(&mut registry, "Work", contact("Ravi", "Singh", "Mumbai", "Maharashtra", 400001));

    let cities: Vec<&str> = registry
        .sort_all(SortField::City)
        .iter()
        .map(|(_, c)| c.city.as_str())
        .collect();
    assert_eq!(cities, vec!["Delhi", "Mumbai", "Pune"]);
}
