//! Sort keys for listing contacts.

use crate::models::Record;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Key used to order contacts in listings.
///
/// Every key breaks ties by case-insensitive name, and the sort is stable,
/// so records that still compare equal keep address book order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSortBy {
    /// Alphabetical by name
    Name,
    /// First phone ascending; contacts without a phone last
    Phone,
    /// Birth date ascending; contacts without a birthday last
    Birthday,
    /// Number of tags, most tagged first
    TagCount,
    /// Comma-joined sorted tags ascending; untagged contacts first
    TagName,
}

impl ContactSortBy {
    pub const ALL: [ContactSortBy; 5] = [
        Self::Name,
        Self::Phone,
        Self::Birthday,
        Self::TagCount,
        Self::TagName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
            Self::TagCount => "tag_count",
            Self::TagName => "tag_name",
        }
    }

    /// Total order of two records under this key.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let primary = match self {
            Self::Name => Ordering::Equal,
            Self::Phone => present_first(
                a.phones().first().map(|p| p.as_str()),
                b.phones().first().map(|p| p.as_str()),
            ),
            Self::Birthday => present_first(
                a.birthday().map(|d| d.date()),
                b.birthday().map(|d| d.date()),
            ),
            Self::TagCount => b.tags().len().cmp(&a.tags().len()),
            Self::TagName => tag_key(a).cmp(&tag_key(b)),
        };

        primary.then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
    }
}

/// Ascending on present values; `None` sorts after every `Some`.
fn present_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn tag_key(record: &Record) -> String {
    record.tags_list().join(",")
}

impl FromStr for ContactSortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "birthday" => Ok(Self::Birthday),
            "tag_count" => Ok(Self::TagCount),
            "tag_name" => Ok(Self::TagName),
            _ => Err(format!(
                "Unknown sort key '{}' (expected one of: name, phone, birthday, tag_count, tag_name)",
                s
            )),
        }
    }
}

impl fmt::Display for ContactSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
