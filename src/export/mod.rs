//! File export/import for contact lists.
//!
//! The persistence collaborator: takes a list of contacts and writes it
//! to a file, or reads one back. The format is chosen by extension:
//!
//! | Extension | Format | Ids preserved on import |
//! |-----------|--------|-------------------------|
//! | `.json`   | pretty-printed JSON array | yes |
//! | `.csv`    | header row + one record per line | no (regenerated) |
//! | `.txt`    | one `\|`-separated 8-field line per record | no (regenerated) |
//!
//! Every format round-trips: importing an export yields the same field
//! values in the same order. The collection layer never sees a file —
//! it hands over `&[Contact]` and accepts `Vec<Contact>` back.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::contact::{Contact, NewContact};
use crate::error::{PersistError, Result};

/// Supported export file formats, selected by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// `.txt` — pipe-separated plain text.
    Text,
    /// `.json` — pretty-printed JSON array.
    Json,
    /// `.csv` — comma-separated with a header row.
    Csv,
}

impl ExportFormat {
    /// Determines the format from a path's extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`PersistError::UnsupportedFormat`] for anything other than
    /// `.txt`, `.json`, or `.csv`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(PersistError::UnsupportedFormat(path.to_path_buf()).into()),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "txt"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// One CSV row. Field order defines the column order; headers match the
/// conventional export layout.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Zip")]
    zip: u32,
    #[serde(rename = "PhoneNumber")]
    phone: String,
    #[serde(rename = "Email")]
    email: String,
}

impl From<&Contact> for CsvRow {
    fn from(c: &Contact) -> Self {
        Self {
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            address: c.address.clone(),
            city: c.city.clone(),
            state: c.state.clone(),
            zip: c.zip,
            phone: c.phone.clone(),
            email: c.email.clone(),
        }
    }
}

impl From<CsvRow> for Contact {
    fn from(row: CsvRow) -> Self {
        NewContact {
            first_name: row.first_name,
            last_name: row.last_name,
            address: row.address,
            city: row.city,
            state: row.state,
            zip: row.zip,
            phone: row.phone,
            email: row.email,
        }
        .into_contact()
    }
}

/// Writes `contacts` to `path` in the format selected by the extension.
///
/// Creates missing parent directories. An existing file is overwritten.
///
/// # Errors
///
/// - [`PersistError::UnsupportedFormat`] for an unknown extension.
/// - I/O and serialization errors from the underlying writer.
#[instrument(skip(contacts), fields(path = %path.as_ref().display(), count = contacts.len()))]
pub fn write_contacts(path: impl AsRef<Path>, contacts: &[Contact]) -> Result<()> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match format {
        ExportFormat::Text => {
            let mut text = String::new();
            for contact in contacts {
                text.push_str(&text_line(contact));
                text.push('\n');
            }
            fs::write(path, text)?;
        }
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(contacts)?;
            fs::write(path, json)?;
        }
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_path(path)?;
            for contact in contacts {
                writer.serialize(CsvRow::from(contact))?;
            }
            writer.flush()?;
        }
    }

    info!(%format, "contacts exported");
    Ok(())
}

/// Reads a contact list from `path`, format selected by the extension.
///
/// JSON preserves contact ids; text and CSV regenerate them (those
/// formats do not carry ids). Field values and record order always
/// round-trip.
///
/// # Errors
///
/// - [`PersistError::UnsupportedFormat`] for an unknown extension.
/// - [`PersistError::Malformed`] for an unparseable text line.
/// - I/O and deserialization errors from the underlying reader
///   (a missing file surfaces as [`RolodexError::Io`](crate::RolodexError::Io)).
#[instrument(fields(path = %path.as_ref().display()))]
pub fn read_contacts(path: impl AsRef<Path>) -> Result<Vec<Contact>> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;

    let contacts = match format {
        ExportFormat::Text => {
            let text = fs::read_to_string(path)?;
            let mut contacts = Vec::new();
            for (i, line) in text.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                contacts.push(parse_text_line(line, i + 1)?);
            }
            contacts
        }
        ExportFormat::Json => {
            let json = fs::read_to_string(path)?;
            serde_json::from_str(&json)?
        }
        ExportFormat::Csv => {
            let mut reader = csv::Reader::from_path(path)?;
            let mut contacts = Vec::new();
            for row in reader.deserialize::<CsvRow>() {
                contacts.push(Contact::from(row?));
            }
            contacts
        }
    };

    info!(%format, count = contacts.len(), "contacts imported");
    Ok(contacts)
}

/// Renders one contact as a pipe-separated 8-field line.
///
/// Unlike the human-facing [`Display`](std::fmt::Display) rendering,
/// this layout is unambiguous (addresses may contain commas but `|` is
/// rejected by the address validator), so text exports can be imported
/// back.
fn text_line(contact: &Contact) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}",
        contact.first_name,
        contact.last_name,
        contact.address,
        contact.city,
        contact.state,
        contact.zip,
        contact.phone,
        contact.email
    )
}

fn parse_text_line(line: &str, line_no: usize) -> Result<Contact> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 8 {
        return Err(PersistError::malformed(
            line_no,
            format!("expected 8 fields, got {}", fields.len()),
        )
        .into());
    }

    let zip: u32 = fields[5].trim().parse().map_err(|_| {
        PersistError::malformed(line_no, format!("zip is not a number: {:?}", fields[5]))
    })?;

    Ok(NewContact {
        first_name: fields[0].to_string(),
        last_name: fields[1].to_string(),
        address: fields[2].to_string(),
        city: fields[3].to_string(),
        state: fields[4].to_string(),
        zip,
        phone: fields[6].to_string(),
        email: fields[7].to_string(),
    }
    .into_contact())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out.txt")).unwrap(),
            ExportFormat::Text
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out.JSON")).unwrap(),
            ExportFormat::Json
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("dir/out.csv")).unwrap(),
            ExportFormat::Csv
        );
    }

    #[test]
    fn test_format_from_path_unsupported() {
        for bad in ["out.xml", "out", "out."] {
            let err = ExportFormat::from_path(&PathBuf::from(bad)).unwrap_err();
            assert!(err.is_persist(), "expected rejection for {bad:?}");
        }
    }

    #[test]
    fn test_text_line_roundtrip() {
        let contact = NewContact {
            first_name: "Ganesh".to_string(),
            last_name: "Kumar".to_string(),
            address: "Flat #4, 7/B Lane-2".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            zip: 411001,
            phone: "+919876543210".to_string(),
            email: "gk@example.com".to_string(),
        }
        .into_contact();

        let line = text_line(&contact);
        let parsed = parse_text_line(&line, 1).unwrap();
        assert!(contact.same_fields(&parsed));
    }

    #[test]
    fn test_parse_text_line_wrong_field_count() {
        let err = parse_text_line("a|b|c", 4).unwrap_err();
        assert!(err.is_persist());
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_parse_text_line_bad_zip() {
        let err =
            parse_text_line("Ganesh|Kumar|12 MG Road|Pune|MH|abc|+919876543210|g@x.com", 2)
                .unwrap_err();
        assert!(err.is_persist());
        assert!(err.to_string().contains("zip"));
    }
}
