//! The address book: an insertion-ordered collection of contact records keyed by name.

use crate::domain::is_valid_tag;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Serialized shape of an address book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BookData {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Ordered mapping of contact name to record.
///
/// Names are case-sensitive keys and unique within a book. Iteration follows
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BookData", into = "BookData")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from records, checking every structural invariant.
    ///
    /// # Errors
    ///
    /// Returns `BookError::MalformedState` on duplicate contact names, a
    /// note stored under a key other than its own name, or a tag that is
    /// not in normalized form.
    pub fn from_records(records: Vec<Record>) -> BookResult<Self> {
        let mut book = Self::new();
        for record in records {
            Self::check_record(&record)?;
            if book.contains(record.name()) {
                return Err(BookError::MalformedState(format!(
                    "duplicate contact '{}'",
                    record.name()
                )));
            }
            book.records.push(record);
        }
        Ok(book)
    }

    fn check_record(record: &Record) -> BookResult<()> {
        if let Some(tag) = record.tags().iter().find(|t| !is_valid_tag(t)) {
            return Err(BookError::MalformedState(format!(
                "contact '{}' has unnormalized tag '{}'",
                record.name(),
                tag
            )));
        }

        for (key, note) in record.notes() {
            if *key != note.name {
                return Err(BookError::MalformedState(format!(
                    "contact '{}' stores note '{}' under key '{}'",
                    record.name(),
                    note.name,
                    key
                )));
            }
            if let Some(tag) = note.tags().iter().find(|t| !is_valid_tag(t)) {
                return Err(BookError::MalformedState(format!(
                    "note '{}' of contact '{}' has unnormalized tag '{}'",
                    note.name,
                    record.name(),
                    tag
                )));
            }
        }
        Ok(())
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateName` if a record with the same name exists;
    /// the existing record is left untouched.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        if self.contains(record.name()) {
            return Err(BookError::DuplicateName(format!(
                "contact '{}'",
                record.name()
            )));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove and return a record, keeping the order of the rest.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        Ok(self.records.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|r| (r.name(), r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<BookData> for AddressBook {
    type Error = BookError;

    fn try_from(data: BookData) -> Result<Self, Self::Error> {
        Self::from_records(data.contacts)
    }
}

impl From<AddressBook> for BookData {
    fn from(book: AddressBook) -> Self {
        Self {
            contacts: book.records,
        }
    }
}
