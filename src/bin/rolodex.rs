//! Interactive address book manager.
//!
//! This binary is the presentation layer: it owns every prompt,
//! confirmation, and printed line. The library core receives only
//! already-decided inputs and returns plain data; outcomes (duplicates,
//! not-found, bad input) come back as typed errors and are rendered
//! here.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rolodex::{
    is_address_valid, is_email_valid, is_name_valid, is_phone_valid, is_zip_valid, AddressBook,
    BookRegistry, Config, Contact, ContactUpdate, LocationKey, NewContact, Result, SortField,
};

#[derive(Parser)]
#[command(name = "rolodex", version, about = "Interactive address book manager")]
struct Cli {
    /// Directory export files are written to and read from
    #[arg(long, default_value = "./contacts")]
    data_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config {
        data_dir: cli.data_dir,
        ..Config::default()
    };
    config.validate()?;

    let mut registry = BookRegistry::new();
    println!("Welcome to Rolodex");
    top_menu(&mut registry, &config)
}

// ============================================================================
// Top menu: registry operations
// ============================================================================

fn top_menu(registry: &mut BookRegistry, config: &Config) -> Result<()> {
    loop {
        println!();
        println!("1. Create address book");
        println!("2. List address books");
        println!("3. Manage an address book");
        println!("4. Delete address book");
        println!("5. Search all books by city or state");
        println!("6. Group all contacts by city or state");
        println!("7. Count all contacts by city or state");
        println!("8. Sort all contacts");
        println!("9. Exit");

        let Some(option) = prompt("Choose an option: ")? else {
            return Ok(()); // EOF
        };
        match option.as_str() {
            "1" => create_book(registry, config)?,
            "2" => list_books(registry),
            "3" => {
                if let Some(name) = select_book(registry)? {
                    book_menu(registry, &name, config)?;
                }
            }
            "4" => delete_book(registry)?,
            "5" => search_all(registry)?,
            "6" => group_all(registry)?,
            "7" => count_all(registry)?,
            "8" => sort_all(registry)?,
            "9" => return Ok(()),
            _ => println!("Invalid option. Please try again."),
        }
    }
}

fn create_book(registry: &mut BookRegistry, config: &Config) -> Result<()> {
    let Some(name) = prompt_valid(
        "Enter book name: ",
        is_name_valid,
        "Invalid book name (start with a capital, min 3 letters)",
        config,
    )?
    else {
        return Ok(());
    };

    match registry.create_book(&name) {
        Ok(()) => println!("Created address book: {name}"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn list_books(registry: &BookRegistry) {
    if registry.is_empty() {
        println!("No address books available.");
        return;
    }
    println!("Available address books:");
    for name in registry.book_names() {
        println!("  {name} ({} contacts)", registry.book(name).map_or(0, AddressBook::len));
    }
    println!("Total: {} contacts in {} books", registry.total_contacts(), registry.len());
}

fn select_book(registry: &BookRegistry) -> io::Result<Option<String>> {
    if registry.is_empty() {
        println!("No address books available.");
        return Ok(None);
    }
    list_books(registry);

    let Some(name) = prompt("Enter name of book to manage: ")? else {
        return Ok(None);
    };
    if registry.book(&name).is_none() {
        println!("No such address book: {name}");
        return Ok(None);
    }
    Ok(Some(name))
}

fn delete_book(registry: &mut BookRegistry) -> Result<()> {
    let Some(name) = prompt("Enter name of book to delete: ")? else {
        return Ok(());
    };
    if !confirm(&format!("Delete book '{name}' and all its contacts?"))? {
        println!("Cancelled.");
        return Ok(());
    }
    match registry.delete_book(&name) {
        Ok(()) => println!("Deleted address book: {name}"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn search_all(registry: &BookRegistry) -> Result<()> {
    let Some(key) = prompt_location_key()? else {
        return Ok(());
    };
    let Some(value) = prompt(&format!("Enter {key} to search: "))? else {
        return Ok(());
    };

    let hits = registry.search_all(key, &value);
    if hits.is_empty() {
        println!("No contacts found in {key} '{value}'.");
        return Ok(());
    }
    println!("Contacts in {key} '{value}':");
    for (book, contact) in hits {
        println!("  [{book}] {contact}");
    }
    Ok(())
}

fn group_all(registry: &BookRegistry) -> Result<()> {
    let Some(key) = prompt_location_key()? else {
        return Ok(());
    };

    let groups = registry.group_all(key);
    if groups.is_empty() {
        println!("No contacts in any book.");
        return Ok(());
    }
    for (bucket, members) in groups {
        println!("{bucket}:");
        for (book, contact) in members {
            println!("  [{book}] {contact}");
        }
    }
    Ok(())
}

fn count_all(registry: &BookRegistry) -> Result<()> {
    let Some(key) = prompt_location_key()? else {
        return Ok(());
    };

    let counts = registry.count_all(key);
    if counts.is_empty() {
        println!("No contacts in any book.");
        return Ok(());
    }
    println!("Contact count by {key}:");
    for (bucket, count) in counts {
        println!("  {bucket}: {count}");
    }
    Ok(())
}

fn sort_all(registry: &BookRegistry) -> Result<()> {
    let Some(choice) = prompt("Sort by (1) name, (2) city, (3) state, (4) zip: ")? else {
        return Ok(());
    };
    let field = match choice.as_str() {
        "1" => SortField::Name,
        "2" => SortField::City,
        "3" => SortField::State,
        "4" => SortField::Zip,
        _ => {
            println!("Invalid option.");
            return Ok(());
        }
    };

    let sorted = registry.sort_all(field);
    if sorted.is_empty() {
        println!("No contacts in any book.");
        return Ok(());
    }
    println!("All contacts sorted by {field}:");
    for (book, contact) in sorted {
        println!("  [{book}] {contact}");
    }
    Ok(())
}

// ============================================================================
// Book menu: operations on one address book
// ============================================================================

fn book_menu(registry: &mut BookRegistry, name: &str, config: &Config) -> Result<()> {
    loop {
        println!();
        println!("Managing address book: {name}");
        println!("1. Add contact");
        println!("2. View contacts");
        println!("3. Edit contact");
        println!("4. Delete contact");
        println!("5. Find by city");
        println!("6. Find by state");
        println!("7. Sort by first name");
        println!("8. Save to file");
        println!("9. Load from file");
        println!("0. Back");

        let Some(option) = prompt("Choose an option: ")? else {
            return Ok(());
        };
        // Deleting the book from another session path is impossible here,
        // so the lookup only fails if the name was never registered.
        let Some(book) = registry.book_mut(name) else {
            println!("Address book not found: {name}");
            return Ok(());
        };

        match option.as_str() {
            "1" => add_contact(book, config)?,
            "2" => view_contacts(book),
            "3" => edit_contact(book, config)?,
            "4" => delete_contact(book)?,
            "5" => find_by(book, LocationKey::City)?,
            "6" => find_by(book, LocationKey::State)?,
            "7" => print_contacts("Sorted by first name", book.sorted_by_first_name()),
            "8" => save_book(book, config)?,
            "9" => load_book(book, config)?,
            "0" => return Ok(()),
            _ => println!("Invalid option. Please try again."),
        }
    }
}

fn add_contact(book: &mut AddressBook, config: &Config) -> Result<()> {
    let Some(contact) = prompt_new_contact(config)? else {
        println!("Contact not added.");
        return Ok(());
    };
    match book.add(contact) {
        Ok(_) => println!("Contact added successfully."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn view_contacts(book: &AddressBook) {
    print_contacts("All contacts", book.contacts().iter().collect());
}

fn edit_contact(book: &mut AddressBook, config: &Config) -> Result<()> {
    let Some(first_name) = prompt("Enter first name of contact to edit: ")? else {
        return Ok(());
    };
    let Some(current) = book
        .contacts()
        .iter()
        .find(|c| c.first_name == first_name)
        .cloned()
    else {
        println!("Contact not found: {first_name}");
        return Ok(());
    };
    println!("Editing: {current}");

    let Some(update) = prompt_contact_update(config)? else {
        println!("Edit abandoned; contact unchanged.");
        return Ok(());
    };
    match book.edit(&first_name, update) {
        Ok(_) => println!("Contact updated successfully."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn delete_contact(book: &mut AddressBook) -> Result<()> {
    let Some(first_name) = prompt("Enter first name of contact to delete: ")? else {
        return Ok(());
    };
    if !confirm(&format!("Delete contact '{first_name}'?"))? {
        println!("Cancelled.");
        return Ok(());
    }
    match book.delete(&first_name) {
        Ok(contact) => println!("Deleted: {contact}"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn find_by(book: &AddressBook, key: LocationKey) -> Result<()> {
    let Some(value) = prompt(&format!("Enter {key} to search: "))? else {
        return Ok(());
    };
    print_contacts(
        &format!("Contacts in {key} '{value}'"),
        book.find_by_location(key, &value),
    );
    Ok(())
}

fn save_book(book: &AddressBook, config: &Config) -> Result<()> {
    let Some(file_name) = prompt("Enter file name (.txt, .json, or .csv): ")? else {
        return Ok(());
    };
    let path = config.resolve_export_path(&file_name);
    match rolodex::write_contacts(&path, book.contacts()) {
        Ok(()) => println!("Saved {} contacts to {}", book.len(), path.display()),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn load_book(book: &mut AddressBook, config: &Config) -> Result<()> {
    let Some(file_name) = prompt("Enter file name (.txt, .json, or .csv): ")? else {
        return Ok(());
    };
    if !book.is_empty()
        && !confirm(&format!(
            "Replace the {} contacts currently in this book?",
            book.len()
        ))?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let path = config.resolve_export_path(&file_name);
    match rolodex::read_contacts(&path) {
        Ok(contacts) => {
            let kept = book.replace_all(contacts);
            println!("Loaded {kept} contacts from {}", path.display());
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

// ============================================================================
// Prompt helpers
// ============================================================================

/// Prints `message` and reads one trimmed line. `None` means EOF.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks a yes/no question; only an explicit `y`/`yes` counts as yes.
fn confirm(question: &str) -> io::Result<bool> {
    let Some(answer) = prompt(&format!("{question} [y/N]: "))? else {
        return Ok(false);
    };
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Prompts until `validator` accepts the input or the configured number
/// of attempts is exhausted. `None` means the caller should abandon the
/// current step.
fn prompt_valid(
    message: &str,
    validator: impl Fn(&str) -> bool,
    error_message: &str,
    config: &Config,
) -> io::Result<Option<String>> {
    for _ in 0..config.prompt_attempts {
        let Some(input) = prompt(message)? else {
            return Ok(None);
        };
        if validator(&input) {
            return Ok(Some(input));
        }
        println!("{error_message}");
    }
    println!("Maximum attempts ({}) reached.", config.prompt_attempts);
    Ok(None)
}

/// Prompts for every contact field, validating each one. `None` if any
/// field ran out of attempts; nothing is added in that case.
fn prompt_new_contact(config: &Config) -> io::Result<Option<NewContact>> {
    let Some((first_name, last_name, address, city, state, zip, phone, email)) =
        prompt_contact_fields(config)?
    else {
        return Ok(None);
    };
    Ok(Some(NewContact {
        first_name,
        last_name,
        address,
        city,
        state,
        zip,
        phone,
        email,
    }))
}

/// Same prompts as a new contact; edits replace every field.
fn prompt_contact_update(config: &Config) -> io::Result<Option<ContactUpdate>> {
    let Some((first_name, last_name, address, city, state, zip, phone, email)) =
        prompt_contact_fields(config)?
    else {
        return Ok(None);
    };
    Ok(Some(ContactUpdate {
        first_name,
        last_name,
        address,
        city,
        state,
        zip,
        phone,
        email,
    }))
}

type ContactFields = (String, String, String, String, String, u32, String, String);

fn prompt_contact_fields(config: &Config) -> io::Result<Option<ContactFields>> {
    let Some(first_name) = prompt_valid(
        "Enter first name: ",
        is_name_valid,
        "Invalid first name (start with a capital, min 3 letters)",
        config,
    )?
    else {
        return Ok(None);
    };
    let Some(last_name) = prompt_valid(
        "Enter last name: ",
        is_name_valid,
        "Invalid last name (start with a capital, min 3 letters)",
        config,
    )?
    else {
        return Ok(None);
    };
    let Some(address) = prompt_valid(
        "Enter address: ",
        is_address_valid,
        "Invalid address (min 3 chars; letters, digits, spaces, #,/.- allowed)",
        config,
    )?
    else {
        return Ok(None);
    };
    let Some(city) = prompt_valid(
        "Enter city: ",
        is_name_valid,
        "Invalid city name",
        config,
    )?
    else {
        return Ok(None);
    };
    let Some(state) = prompt_valid(
        "Enter state: ",
        is_name_valid,
        "Invalid state name",
        config,
    )?
    else {
        return Ok(None);
    };
    let Some(zip_str) = prompt_valid(
        "Enter zip code: ",
        is_zip_valid,
        "Invalid zip (must be 6 digits, no leading zero)",
        config,
    )?
    else {
        return Ok(None);
    };
    // Validated against ^[1-9][0-9]{5}$, so this cannot fail
    let zip: u32 = zip_str.parse().unwrap_or_default();
    let Some(phone) = prompt_valid(
        "Enter phone number: ",
        is_phone_valid,
        "Invalid phone number (+91 followed by 10 digits)",
        config,
    )?
    else {
        return Ok(None);
    };
    let Some(email) = prompt_valid(
        "Enter email: ",
        is_email_valid,
        "Invalid email address",
        config,
    )?
    else {
        return Ok(None);
    };

    Ok(Some((
        first_name, last_name, address, city, state, zip, phone, email,
    )))
}

fn prompt_location_key() -> io::Result<Option<LocationKey>> {
    let Some(choice) = prompt("Search by (1) city or (2) state: ")? else {
        return Ok(None);
    };
    match choice.as_str() {
        "1" => Ok(Some(LocationKey::City)),
        "2" => Ok(Some(LocationKey::State)),
        _ => {
            println!("Invalid option.");
            Ok(None)
        }
    }
}

fn print_contacts(title: &str, contacts: Vec<&Contact>) {
    if contacts.is_empty() {
        println!("{title}: none.");
        return;
    }
    println!("{title}:");
    for contact in contacts {
        println!("  {contact}");
    }
}
