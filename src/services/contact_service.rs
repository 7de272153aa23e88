//! Contact service layer.
//!
//! Business logic for contact lookup, validation, sorting, tag search and
//! birthday reminders over an address book.

use crate::domain::{prepare_tags, TagInput};
use crate::error::{BookError, BookResult};
use crate::matching::{ContactMatcher, MatchResult};
use crate::models::{AddressBook, Record};
use crate::services::birthdays::{upcoming_birthdays, UpcomingBirthday};
use crate::services::sorting::ContactSortBy;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Returned by `get_phone` for a contact without phones.
pub const NO_PHONES: &str = "No phones";

/// Returned by `get_birthday` for a contact without a birthday.
pub const NO_BIRTHDAY: &str = "No birthday set";

/// Returned by `get_all_contacts` for an empty book.
pub const EMPTY_BOOK: &str = "Address book is empty.";

/// Returned by `get_upcoming_birthdays` when nobody is in the window.
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays";

/// Contact service trait for business operations.
pub trait ContactService {
    /// Add a contact, or append the phone if the contact already exists.
    fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<String>;

    /// Replace one of a contact's phones.
    fn change_contact(&mut self, name: &str, old_phone: &str, new_phone: &str)
        -> BookResult<String>;

    /// Remove one phone from a contact.
    fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<String>;

    /// Remove a contact from the book.
    fn delete_contact(&mut self, name: &str) -> BookResult<String>;

    /// All of a contact's phones joined with `"; "`, or [`NO_PHONES`].
    fn get_phone(&self, name: &str) -> BookResult<String>;

    /// Set a contact's birthday from a `DD.MM.YYYY` string.
    fn add_birthday(&mut self, name: &str, birthday: &str) -> BookResult<String>;

    /// The birthday as `DD.MM.YYYY`, or [`NO_BIRTHDAY`].
    fn get_birthday(&self, name: &str) -> BookResult<String>;

    fn has_contacts(&self) -> bool;

    /// Contacts ordered by `sort_by`, or in book order when `None`.
    fn list_contacts(&self, sort_by: Option<ContactSortBy>) -> Vec<(&str, &Record)>;

    /// One line per contact from [`ContactService::list_contacts`], or [`EMPTY_BOOK`].
    fn get_all_contacts(&self, sort_by: Option<ContactSortBy>) -> String;

    /// Birthdays in the next `days` days as of `today`.
    fn calculate_upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday>;

    /// Formatted upcoming birthdays as of `today`, or [`NO_UPCOMING_BIRTHDAYS`].
    fn get_upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> String;

    /// Formatted upcoming birthdays as of the local date.
    fn get_upcoming_birthdays(&self, days: u32) -> String {
        self.get_upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    fn add_tag(&mut self, name: &str, tag: &str) -> BookResult<String>;

    fn remove_tag(&mut self, name: &str, tag: &str) -> BookResult<String>;

    fn clear_tags(&mut self, name: &str) -> BookResult<String>;

    /// Sorted tags of a contact.
    fn list_tags(&self, name: &str) -> BookResult<Vec<String>>;

    /// Contacts carrying every requested tag (AND).
    fn find_by_tags_all(&self, tags: TagInput) -> BookResult<Vec<(&str, &Record)>>;

    /// Contacts carrying at least one requested tag (OR).
    fn find_by_tags_any(&self, tags: TagInput) -> BookResult<Vec<(&str, &Record)>>;

    /// Fuzzy search by name or phone fragment.
    fn search(&self, query: &str, max_results: usize, min_confidence: u8) -> Vec<MatchResult<'_>>;
}

/// Default implementation of ContactService over a borrowed address book.
pub struct ContactServiceImpl<'a> {
    book: &'a mut AddressBook,
    matcher: ContactMatcher,
}

impl<'a> ContactServiceImpl<'a> {
    /// Create a new contact service.
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self {
            book,
            matcher: ContactMatcher::new(),
        }
    }

    /// Read access to the underlying book.
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

    /// Contacts whose tag set satisfies `predicate` against the prepared tags.
    ///
    /// An empty tag list matches nothing.
    fn filter_by_tags<F>(&self, tags: &TagInput, predicate: F) -> BookResult<Vec<(&str, &Record)>>
    where
        F: Fn(&Record, &[String]) -> bool,
    {
        let wanted = prepare_tags(tags)?;
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .book
            .iter()
            .filter(|(_, record)| predicate(*record, wanted.as_slice()))
            .collect())
    }
}

impl ContactService for ContactServiceImpl<'_> {
    fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<String> {
        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            debug!(contact = name, "appended phone to existing contact");
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::new(name);
        record.add_phone(phone)?;
        self.book.add_record(record)?;
        debug!(contact = name, "added contact");
        Ok("Contact added.".to_string())
    }

    fn change_contact(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> BookResult<String> {
        self.record_mut(name)?.edit_phone(old_phone, new_phone)?;
        debug!(contact = name, "changed phone");
        Ok("Contact updated.".to_string())
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<String> {
        self.record_mut(name)?.remove_phone(phone)?;
        debug!(contact = name, "removed phone");
        Ok("Phone removed.".to_string())
    }

    fn delete_contact(&mut self, name: &str) -> BookResult<String> {
        self.book.delete(name)?;
        debug!(contact = name, "deleted contact");
        Ok("Contact deleted.".to_string())
    }

    fn get_phone(&self, name: &str) -> BookResult<String> {
        let record = self.record(name)?;
        if record.phones().is_empty() {
            return Ok(NO_PHONES.to_string());
        }
        Ok(record.phones_joined())
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> BookResult<String> {
        self.record_mut(name)?.add_birthday(birthday)?;
        debug!(contact = name, "set birthday");
        Ok("Birthday added.".to_string())
    }

    fn get_birthday(&self, name: &str) -> BookResult<String> {
        Ok(self
            .record(name)?
            .birthday()
            .map(ToString::to_string)
            .unwrap_or_else(|| NO_BIRTHDAY.to_string()))
    }

    fn has_contacts(&self) -> bool {
        !self.book.is_empty()
    }

    fn list_contacts(&self, sort_by: Option<ContactSortBy>) -> Vec<(&str, &Record)> {
        let mut items: Vec<(&str, &Record)> = self.book.iter().collect();
        if let Some(key) = sort_by {
            items.sort_by(|(_, a), (_, b)| key.compare(a, b));
        }
        items
    }

    fn get_all_contacts(&self, sort_by: Option<ContactSortBy>) -> String {
        if !self.has_contacts() {
            return EMPTY_BOOK.to_string();
        }

        self.list_contacts(sort_by)
            .into_iter()
            .map(|(_, record)| record.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn calculate_upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(&*self.book, today, days)
    }

    fn get_upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> String {
        let upcoming = self.calculate_upcoming_birthdays(today, days);
        debug!(days, found = upcoming.len(), "calculated upcoming birthdays");

        if upcoming.is_empty() {
            return NO_UPCOMING_BIRTHDAYS.to_string();
        }

        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_tag(&mut self, name: &str, tag: &str) -> BookResult<String> {
        let tag = self.record_mut(name)?.add_tag(tag)?;
        debug!(contact = name, tag = %tag, "added tag");
        Ok(format!("Tag '{}' added to {}.", tag, name))
    }

    fn remove_tag(&mut self, name: &str, tag: &str) -> BookResult<String> {
        let tag = self.record_mut(name)?.remove_tag(tag)?;
        debug!(contact = name, tag = %tag, "removed tag");
        Ok(format!("Tag '{}' removed from {}.", tag, name))
    }

    fn clear_tags(&mut self, name: &str) -> BookResult<String> {
        self.record_mut(name)?.clear_tags();
        debug!(contact = name, "cleared tags");
        Ok(format!("All tags cleared for {}.", name))
    }

    fn list_tags(&self, name: &str) -> BookResult<Vec<String>> {
        Ok(self.record(name)?.tags_list())
    }

    fn find_by_tags_all(&self, tags: TagInput) -> BookResult<Vec<(&str, &Record)>> {
        self.filter_by_tags(&tags, |record, wanted| {
            wanted.iter().all(|tag| record.has_tag(tag))
        })
    }

    fn find_by_tags_any(&self, tags: TagInput) -> BookResult<Vec<(&str, &Record)>> {
        self.filter_by_tags(&tags, |record, wanted| {
            wanted.iter().any(|tag| record.has_tag(tag))
        })
    }

    fn search(&self, query: &str, max_results: usize, min_confidence: u8) -> Vec<MatchResult<'_>> {
        self.matcher
            .find_matches(query, &*self.book, max_results, min_confidence)
    }
}
