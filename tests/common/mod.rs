//! Shared setup and assertions for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_book::Record;

pub mod fixtures;

/// Monday 19 October 2026, the reference date for birthday tests.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Names of `(name, record)` pairs in order.
pub fn names<'a>(items: &[(&'a str, &Record)]) -> Vec<&'a str> {
    items.iter().map(|(name, _)| *name).collect()
}
