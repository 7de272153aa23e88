//! Contact record: one person's phones, birthday, tags and notes.

use crate::domain::{parse_tag, Birthday, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::Note;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at creation and is the record's key in the book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: String,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    notes: BTreeMap<String, Note>,
}

impl Record {
    /// Create an empty record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
            tags: BTreeSet::new(),
            notes: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ==================== Phones ====================

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate and append a phone.
    ///
    /// Returns `false` without changing anything if the phone is already present.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<bool> {
        let phone = PhoneNumber::new(phone)?;
        if self.phones.contains(&phone) {
            return Ok(false);
        }
        self.phones.push(phone);
        Ok(true)
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove a phone, failing with `NotFound` if absent.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self.phone_index(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new` in place.
    ///
    /// The new value is validated before the old one is looked up. If `new`
    /// is already on the record, `old` is simply dropped.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let new = PhoneNumber::new(new)?;
        let index = self.phone_index(old)?;

        if self.phones.iter().any(|p| *p == new) && self.phones[index] != new {
            self.phones.remove(index);
        } else {
            self.phones[index] = new;
        }
        Ok(())
    }

    /// Phones joined with `"; "`, empty when there are none.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn phone_index(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| {
                BookError::NotFound(format!("phone {} for contact '{}'", phone, self.name))
            })
    }

    // ==================== Birthday ====================

    /// Parse and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, value: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    // ==================== Tags ====================

    /// Normalize, validate and add a tag. Adding a present tag is a no-op.
    ///
    /// Returns the normalized tag.
    pub fn add_tag(&mut self, raw: &str) -> BookResult<String> {
        let tag = parse_tag(raw)?;
        self.tags.insert(tag.clone());
        Ok(tag)
    }

    /// Remove a tag, failing with `NotFound` if the contact does not carry it.
    pub fn remove_tag(&mut self, raw: &str) -> BookResult<String> {
        let tag = parse_tag(raw)?;
        if !self.tags.remove(&tag) {
            return Err(BookError::NotFound(format!(
                "tag '{}' on contact '{}'",
                tag, self.name
            )));
        }
        Ok(tag)
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Tags in sorted order.
    pub fn tags_list(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    // ==================== Notes ====================

    /// Add a note, failing with `DuplicateName` if the name is taken.
    pub fn add_note(&mut self, name: &str, content: &str) -> BookResult<()> {
        if self.notes.contains_key(name) {
            return Err(BookError::DuplicateName(format!(
                "note '{}' for contact '{}'",
                name, self.name
            )));
        }
        self.notes.insert(name.to_string(), Note::new(name, content));
        Ok(())
    }

    pub fn edit_note(&mut self, name: &str, content: &str) -> BookResult<()> {
        self.note_mut(name)?.set_content(content);
        Ok(())
    }

    pub fn delete_note(&mut self, name: &str) -> BookResult<Note> {
        self.notes
            .remove(name)
            .ok_or_else(|| BookError::note_not_found(&self.name, name))
    }

    pub fn find_note(&self, name: &str) -> Option<&Note> {
        self.notes.get(name)
    }

    /// Notes ordered by name.
    pub fn list_notes(&self) -> Vec<&Note> {
        self.notes.values().collect()
    }

    pub fn note_add_tag(&mut self, note: &str, tag: &str) -> BookResult<String> {
        self.note_mut(note)?.add_tag(tag)
    }

    pub fn note_remove_tag(&mut self, note: &str, tag: &str) -> BookResult<String> {
        self.note_mut(note)?.remove_tag(tag)
    }

    pub fn note_clear_tags(&mut self, note: &str) -> BookResult<()> {
        self.note_mut(note)?.clear_tags();
        Ok(())
    }

    pub fn note_list_tags(&self, note: &str) -> BookResult<Vec<String>> {
        self.notes
            .get(note)
            .map(Note::tags_list)
            .ok_or_else(|| BookError::note_not_found(&self.name, note))
    }

    pub(crate) fn notes(&self) -> &BTreeMap<String, Note> {
        &self.notes
    }

    fn note_mut(&mut self, name: &str) -> BookResult<&mut Note> {
        let contact = &self.name;
        self.notes
            .get_mut(name)
            .ok_or_else(|| BookError::note_not_found(contact, name))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: {}", self.name, self.phones_joined())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        if !self.tags.is_empty() {
            write!(f, ", tags: {}", self.tags_list().join(", "))?;
        }
        Ok(())
    }
}
