//! Note service layer.
//!
//! Business logic for notes attached to contacts and for note tags.

use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Note, Record};
use tracing::debug;

/// Shown in `list_contacts` for a contact without phones.
pub const NO_PHONE: &str = "No phone";

/// Note service trait for business operations.
pub trait NoteService {
    fn has_contacts(&self) -> bool;

    /// `(name, phones)` pairs sorted by name, phones joined with `", "`.
    fn list_contacts(&self) -> Vec<(String, String)>;

    /// Add a note to a contact. Content may be empty.
    fn add_note(&mut self, contact: &str, note: &str, content: &str) -> BookResult<String>;

    /// Replace a note's content.
    fn edit_note(&mut self, contact: &str, note: &str, content: &str) -> BookResult<String>;

    fn delete_note(&mut self, contact: &str, note: &str) -> BookResult<String>;

    /// Notes of a contact ordered by name.
    fn list_notes(&self, contact: &str) -> BookResult<Vec<&Note>>;

    fn get_note(&self, contact: &str, note: &str) -> BookResult<&Note>;

    fn note_add_tag(&mut self, contact: &str, note: &str, tag: &str) -> BookResult<String>;

    fn note_remove_tag(&mut self, contact: &str, note: &str, tag: &str) -> BookResult<String>;

    fn note_clear_tags(&mut self, contact: &str, note: &str) -> BookResult<String>;

    fn note_list_tags(&self, contact: &str, note: &str) -> BookResult<Vec<String>>;
}

/// Default implementation of NoteService over a borrowed address book.
pub struct NoteServiceImpl<'a> {
    book: &'a mut AddressBook,
}

impl<'a> NoteServiceImpl<'a> {
    /// Create a new note service.
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    pub fn address_book(&self) -> &AddressBook {
        &*self.book
    }

    fn record(&self, name: &str) -> BookResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::contact_not_found(name))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::contact_not_found(name))
    }
}

impl NoteService for NoteServiceImpl<'_> {
    fn has_contacts(&self) -> bool {
        !self.book.is_empty()
    }

    fn list_contacts(&self) -> Vec<(String, String)> {
        let mut contacts: Vec<(String, String)> = self
            .book
            .iter()
            .map(|(name, record)| {
                let phones = if record.phones().is_empty() {
                    NO_PHONE.to_string()
                } else {
                    record
                        .phones()
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                (name.to_string(), phones)
            })
            .collect();
        contacts.sort_by(|a, b| a.0.cmp(&b.0));
        contacts
    }

    fn add_note(&mut self, contact: &str, note: &str, content: &str) -> BookResult<String> {
        self.record_mut(contact)?.add_note(note, content)?;
        debug!(contact, note, "added note");
        Ok(format!("Note '{}' added to {}.", note, contact))
    }

    fn edit_note(&mut self, contact: &str, note: &str, content: &str) -> BookResult<String> {
        self.record_mut(contact)?.edit_note(note, content)?;
        debug!(contact, note, "edited note");
        Ok(format!("Note '{}' updated for {}.", note, contact))
    }

    fn delete_note(&mut self, contact: &str, note: &str) -> BookResult<String> {
        self.record_mut(contact)?.delete_note(note)?;
        debug!(contact, note, "deleted note");
        Ok(format!("Note '{}' deleted from {}.", note, contact))
    }

    fn list_notes(&self, contact: &str) -> BookResult<Vec<&Note>> {
        Ok(self.record(contact)?.list_notes())
    }

    fn get_note(&self, contact: &str, note: &str) -> BookResult<&Note> {
        self.record(contact)?
            .find_note(note)
            .ok_or_else(|| BookError::note_not_found(contact, note))
    }

    fn note_add_tag(&mut self, contact: &str, note: &str, tag: &str) -> BookResult<String> {
        let tag = self.record_mut(contact)?.note_add_tag(note, tag)?;
        debug!(contact, note, tag = %tag, "added note tag");
        Ok(format!("Tag '{}' added to note '{}'.", tag, note))
    }

    fn note_remove_tag(&mut self, contact: &str, note: &str, tag: &str) -> BookResult<String> {
        let tag = self.record_mut(contact)?.note_remove_tag(note, tag)?;
        debug!(contact, note, tag = %tag, "removed note tag");
        Ok(format!("Tag '{}' removed from note '{}'.", tag, note))
    }

    fn note_clear_tags(&mut self, contact: &str, note: &str) -> BookResult<String> {
        self.record_mut(contact)?.note_clear_tags(note)?;
        debug!(contact, note, "cleared note tags");
        Ok(format!("All tags cleared from note '{}'.", note))
    }

    fn note_list_tags(&self, contact: &str, note: &str) -> BookResult<Vec<String>> {
        self.record(contact)?.note_list_tags(note)
    }
}
