//! Test fixtures and sample data.
//!
//! Reusable address books for service, search and storage tests.

use contact_book::{AddressBook, Record};

/// A book with one contact: John, phone 1234567890, born 15.05.1990.
pub fn populated_book() -> AddressBook {
    let mut book = AddressBook::new();
    let mut john = Record::new("John");
    john.add_phone("1234567890").unwrap();
    john.add_birthday("15.05.1990").unwrap();
    book.add_record(john).unwrap();
    book
}

/// Three contacts used for sorting and tag search.
///
/// - Pavlo: 3333333333, 15.05.1990, tags ml + ai
/// - Anna: 1111111111, 01.01.1980, tag ai
/// - Illia: 2222222222, no birthday, no tags
pub fn sorting_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut pavlo = Record::new("Pavlo");
    pavlo.add_phone("3333333333").unwrap();
    pavlo.add_birthday("15.05.1990").unwrap();
    pavlo.add_tag("ml").unwrap();
    pavlo.add_tag("ai").unwrap();
    book.add_record(pavlo).unwrap();

    let mut anna = Record::new("Anna");
    anna.add_phone("1111111111").unwrap();
    anna.add_birthday("01.01.1980").unwrap();
    anna.add_tag("ai").unwrap();
    book.add_record(anna).unwrap();

    let mut illia = Record::new("Illia");
    illia.add_phone("2222222222").unwrap();
    book.add_record(illia).unwrap();

    book
}

/// A record with the given birthday and no phones.
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name);
    record.add_birthday(birthday).unwrap();
    record
}

