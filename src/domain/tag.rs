//! Tag normalization and validation.
//!
//! Tags are short labels attached to contacts and notes. Every tag is
//! normalized (trimmed, inner whitespace collapsed, lowercased) before it is
//! stored or compared, and a stored tag always matches `^[a-z0-9_-]{1,32}$`.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]{1,32}$").expect("Failed to compile tag regex"));

/// Trim, collapse internal whitespace runs to one space, and lowercase.
///
/// Total and idempotent.
pub fn normalize_tag(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True iff `tag` is non-empty and matches the normalized tag pattern.
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && TAG_REGEX.is_match(tag)
}

/// Split a comma-separated string into trimmed, non-empty parts.
///
/// Case is preserved; normalization happens when tags are applied.
pub fn split_tags_string(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize and validate a single tag.
///
/// # Errors
///
/// Returns `ValidationError::InvalidTag` carrying the raw input if the
/// normalized form is not a valid tag.
pub fn parse_tag(raw: &str) -> Result<String, ValidationError> {
    let normalized = normalize_tag(raw);
    if !is_valid_tag(&normalized) {
        return Err(ValidationError::InvalidTag(raw.to_string()));
    }
    Ok(normalized)
}

/// Tags as supplied by a caller: one comma-separated string or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInput {
    /// `"ai, ML ,python"`
    Csv(String),
    /// `["ai", "ML", "python"]`
    List(Vec<String>),
}

impl From<&str> for TagInput {
    fn from(value: &str) -> Self {
        Self::Csv(value.to_string())
    }
}

impl From<String> for TagInput {
    fn from(value: String) -> Self {
        Self::Csv(value)
    }
}

impl From<Vec<String>> for TagInput {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for TagInput {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TagInput {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TagInput {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Turn caller input into a list of normalized, validated, distinct tags.
///
/// A comma-separated string drops empty parts; an explicit list keeps every
/// element, so an empty element is an error. Input order is preserved.
///
/// # Errors
///
/// Returns `ValidationError::InvalidTag` for the first element that does not
/// normalize to a valid tag.
pub fn prepare_tags(input: &TagInput) -> Result<Vec<String>, ValidationError> {
    let raw = match input {
        TagInput::Csv(s) => split_tags_string(s),
        TagInput::List(items) => items.clone(),
    };

    let mut prepared: Vec<String> = Vec::with_capacity(raw.len());
    for item in &raw {
        let tag = parse_tag(item)?;
        if !prepared.contains(&tag) {
            prepared.push(tag);
        }
    }
    Ok(prepared)
}
