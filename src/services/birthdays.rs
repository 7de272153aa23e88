//! Upcoming birthday calculation.

use crate::domain::format_date;
use crate::models::AddressBook;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// Window used when a caller does not choose one.
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,

    /// Day to congratulate: the occurrence, moved to Monday if it is a weekend
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, format_date(self.congratulation_date))
    }
}

/// Move a Saturday or Sunday forward to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

/// Contacts whose birthday occurs between `today` and `today + days`, inclusive.
///
/// Only this year's occurrence is considered, so birthdays earlier in the
/// year are excluded. The window test uses the unadjusted occurrence; the
/// weekend roll-forward is applied afterwards. Results are ordered by
/// congratulation date, ties in address book order.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
    let window = i64::from(days);

    let mut upcoming: Vec<UpcomingBirthday> = book
        .iter()
        .filter_map(|(name, record)| {
            let occurrence = record.birthday()?.occurrence_in(today.year());
            let delta = (occurrence - today).num_days();
            (0..=window).contains(&delta).then(|| UpcomingBirthday {
                name: name.to_string(),
                congratulation_date: congratulation_date(occurrence),
            })
        })
        .collect();

    upcoming.sort_by_key(|u| u.congratulation_date);
    upcoming
}
