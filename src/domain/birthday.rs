//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual date format used at every boundary: `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile date shape regex")
});

/// A validated calendar date of birth.
///
/// Parsing is strict: two-digit day, two-digit month and four-digit year
/// separated by dots. Anything else, including impossible dates such as
/// `31.02.1990`, is rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.05.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.05.1990");
/// assert!(Birthday::parse("1990-05-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on any other pattern or on a
    /// date that does not exist.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE_REGEX.is_match(value) {
            return Err(ValidationError::InvalidDate(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))
    }

    /// Wrap an already-valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`.
    ///
    /// 29 February maps to 28 February in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

/// Format a date with [`DATE_FORMAT`].
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_parse_valid() {
        let birthday = Birthday::parse("01.01.1980").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1980, 1, 1).unwrap());
    }

    #[test]
    fn test_birthday_rejects_other_patterns() {
        for input in [
            "invalid-date",
            "1990-05-15",
            "15/05/1990",
            "1.5.1990",
            "15.05.90",
            " 15.05.1990",
            "15.05.1990 ",
            "",
        ] {
            assert!(Birthday::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::parse("31.02.1990").is_err());
        assert!(Birthday::parse("00.01.1990").is_err());
        assert!(Birthday::parse("29.02.1991").is_err());
        assert!(Birthday::parse("29.02.1992").is_ok());
    }

    #[test]
    fn test_birthday_display_round_trips() {
        let birthday = Birthday::parse("05.11.2001").unwrap();
        assert_eq!(birthday.to_string(), "05.11.2001");
    }

    #[test]
    fn test_occurrence_in_other_year() {
        let birthday = Birthday::parse("15.05.1990").unwrap();
        assert_eq!(
            birthday.occurrence_in(2026),
            NaiveDate::from_ymd_opt(2026, 5, 15).unwrap()
        );
    }

    #[test]
    fn test_leap_day_occurrence_in_common_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(
            birthday.occurrence_in(2025),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert_eq!(
            birthday.occurrence_in(2028),
            NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_birthday_serde() {
        let birthday = Birthday::parse("10.03.1995").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"10.03.1995\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);

        let bad: Result<Birthday, _> = serde_json::from_str("\"1995-03-10\"");
        assert!(bad.is_err());
    }
}
