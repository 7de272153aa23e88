//! Note model representing a named note attached to a contact.

use crate::domain::parse_tag;
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named note stored on a contact record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Note {
    /// Note name, unique within its contact
    pub name: String,

    /// Free text content
    #[serde(default)]
    pub content: String,

    /// Normalized tags
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<String>,
}

impl Note {
    /// Create a new untagged note.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Replace the note content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Normalize, validate and add a tag. Adding a present tag is a no-op.
    ///
    /// Returns the normalized tag.
    pub fn add_tag(&mut self, raw: &str) -> BookResult<String> {
        let tag = parse_tag(raw)?;
        self.tags.insert(tag.clone());
        Ok(tag)
    }

    /// Remove a tag, failing with `NotFound` if the note does not carry it.
    pub fn remove_tag(&mut self, raw: &str) -> BookResult<String> {
        let tag = parse_tag(raw)?;
        if !self.tags.remove(&tag) {
            return Err(BookError::NotFound(format!(
                "tag '{}' on note '{}'",
                tag, self.name
            )));
        }
        Ok(tag)
    }

    /// Remove every tag.
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Tags in sorted order.
    pub fn tags_list(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }

    /// Borrow the tag set.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}
