//! Integration tests for ContactService.
//!
//! Covers contact and phone management, birthdays, sorting and tag
//! management against a real in-memory address book.

use chrono::Duration;
use contact_book::services::{EMPTY_BOOK, NO_BIRTHDAY, NO_PHONES, NO_UPCOMING_BIRTHDAYS};
use contact_book::{
    AddressBook, BookError, ContactService, ContactServiceImpl, ContactSortBy, Record,
};

mod common;
use common::fixtures::*;
use common::*;

// --- Contacts and phones ---

#[test]
fn test_add_new_contact() {
    let mut book = AddressBook::new();
    let mut service = ContactServiceImpl::new(&mut book);

    assert_eq!(service.add_contact("Alice", "1234567890").unwrap(), "Contact added.");
    assert!(service.address_book().find("Alice").is_some());
}

#[test]
fn test_add_phone_to_existing_contact() {
    let mut book = populated_book();
    let mut service = ContactServiceImpl::new(&mut book);

    assert_eq!(service.add_contact("John", "0987654321").unwrap(), "Contact updated.");
    assert_eq!(service.address_book().find("John").unwrap().phones().len(), 2);
}

#[test]
fn test_add_contact_with_invalid_phone() {
    let mut book = AddressBook::new();
    let mut service = ContactServiceImpl::new(&mut book);

    let err = service.add_contact("Bob", "invalid").unwrap_err();
    assert_eq!(err, BookError::InvalidPhone("invalid".to_string()));
}

#[test]
fn test_change_existing_phone() {
    let mut book = populated_book();
    let mut service = ContactServiceImpl::new(&mut book);

    let result = service.change_contact("John", "1234567890", "0987654321").unwrap();
    assert_eq!(result, "Contact updated.");

    let record = service.address_book().find("John").unwrap();
    assert!(record.find_phone("0987654321").is_some());
    assert!(record.find_phone("1234567890").is_none());
}

#[test]
fn test_change_phone_contact_not_found() {
    let mut book = AddressBook::new();
    let mut service = ContactServiceImpl::new(&mut book);

    let err = service
        .change_contact("NonExistent", "1234567890", "0987654321")
        .unwrap_err();
    assert!(matches!(err, BookError::NotFound(_)));
}

#[test]
fn test_change_phone_number_not_found() {
    let mut book = populated_book();
    let mut service = ContactServiceImpl::new(&mut book);

    assert!(matches!(
        service.change_contact("John", "9999999999", "0987654321"),
        Err(BookError::NotFound(_))
    ));
    assert_eq!(service.get_phone("John").unwrap(), "1234567890");
}

#[test]
fn test_change_phone_invalid_replacement() {
    let mut book = populated_book();
    let mut service = ContactServiceImpl::new(&mut book);

    assert!(matches!(
        service.change_contact("John", "1234567890", "12"),
        Err(BookError::InvalidPhone(_))
    ));
    assert_eq!(service.get_phone("John").unwrap(), "1234567890");
}

#[test]
fn test_get_phone() {
    let mut book = populated_book();
    book.add_record(Record::new("NoPhone")).unwrap();
    let mut service = ContactServiceImpl::new(&mut book);

    assert_eq!(service.get_phone("John").unwrap(), "1234567890");
    assert_eq!(service.get_phone("NoPhone").unwrap(), NO_PHONES);
    assert!(matches!(
        service.get_phone("NonExistent"),
        Err(BookError::NotFound(_))
    ));

    service.add_contact("John", "5555555555").unwrap();
    assert_eq!(service.get_phone("John").unwrap(), "1234567890; 5555555555");
}

#[test]
fn test_remove_phone() {
    let mut book = populated_book();
    let mut service = ContactServiceImpl::new(&mut book);

    assert_eq!(service.remove_phone("John", "1234567890").unwrap(), "Phone removed.");
    assert_eq!(service.get_phone("John").unwrap(), NO_PHONES);
    assert!(matches!(
        service.remove_phone("John", "1234567890"),
        Err(BookError::NotFound(_))
    ));
}

#[test]
fn test_delete_contact() {
    let mut book = sorting_book();
    let mut service = ContactServiceImpl::new(&mut book);

    assert_eq!(service.delete_contact("Anna").unwrap(), "Contact deleted.");
    assert_eq!(names(&service.list_contacts(None)), vec!["Pavlo", "Illia"]);
    assert!(matches!(
        service.delete_contact("Anna"),
        Err(BookError::NotFound(_))
    ));
}

#[test]
fn test_has_contacts() {
    let mut empty = AddressBook::new();
    assert!(!ContactServiceImpl::new(&mut empty).has_contacts());

    let mut book = populated_book();
    assert!(ContactServiceImpl::new(&mut book).has_contacts());
}

#[test]
fn test_get_all_contacts() {
    let mut empty = AddressBook::new();
    assert_eq!(ContactServiceImpl::new(&mut empty).get_all_contacts(None), EMPTY_BOOK);

    let mut book = populated_book();
    let service = ContactServiceImpl::new(&mut book);
    assert_eq!(
        service.get_all_contacts(None),
        "Contact name: John, phones: 1234567890, birthday: 15.05.1990"
    );
}

// --- Birthdays ---

#[test]
fn test_add_and_get_birthday() {
    let mut book = AddressBook::new();
    let mut service = ContactServiceImpl::new(&mut book);
    service.add_contact("Alice", "1234567890").unwrap();

    assert_eq!(service.get_birthday("Alice").unwrap(), NO_BIRTHDAY);
    assert_eq!(service.add_birthday("Alice", "10.03.1995").unwrap(), "Birthday added.");
    assert_eq!(service.get_birthday("Alice").unwrap(), "10.03.1995");
}

#[test]
fn test_add_birthday_errors() {
    let mut book = AddressBook::new();
    let mut service = ContactServiceImpl::new(&mut book);
    service.add_contact("Alice", "1234567890").unwrap();

    assert!(matches!(
        service.add_birthday("NonExistent", "10.03.1995"),
        Err(BookError::NotFound(_))
    ));
    assert!(matches!(
        service.add_birthday("Alice", "invalid-date"),
        Err(BookError::InvalidFormat(_))
    ));
    assert!(matches!(
        service.add_birthday("Alice", "31.02.1995"),
        Err(BookError::InvalidFormat(_))
    ));
    assert!(matches!(
        service.get_birthday("NonExistent"),
        Err(BookError::NotFound(_))
    ));
}

#[test]
fn test_upcoming_birthdays_none() {
    let mut book = AddressBook::new();
    let service = ContactServiceImpl::new(&mut book);
    assert_eq!(
        service.get_upcoming_birthdays_from(monday(), 7),
        NO_UPCOMING_BIRTHDAYS
    );
}

#[test]
fn test_upcoming_birthdays_window_edges() {
    let today = monday();
    let mut book = AddressBook::new();
    // today, +7 (inside), +8 (outside), -1 (already passed)
    book.add_record(record_with_birthday("Today", "19.10.2000")).unwrap();
    book.add_record(record_with_birthday("Edge", "26.10.2000")).unwrap();
    book.add_record(record_with_birthday("Far", "27.10.2000")).unwrap();
    book.add_record(record_with_birthday("Past", "18.10.2000")).unwrap();

    let service = ContactServiceImpl::new(&mut book);
    let upcoming = service.calculate_upcoming_birthdays(today, 7);
    let found: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(found, vec!["Today", "Edge"]);
    assert_eq!(upcoming[0].congratulation_date, today);
    assert_eq!(upcoming[1].congratulation_date, today + Duration::days(7));
}

#[test]
fn test_upcoming_birthdays_weekend_adjustment() {
    let today = monday();
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Saturday", "24.10.1990")).unwrap();
    book.add_record(record_with_birthday("Sunday", "25.10.1985")).unwrap();
    book.add_record(record_with_birthday("Friday", "23.10.1970")).unwrap();

    let service = ContactServiceImpl::new(&mut book);
    assert_eq!(
        service.get_upcoming_birthdays_from(today, 7),
        "Friday: 23.10.2026\nSaturday: 26.10.2026\nSunday: 26.10.2026"
    );
}

#[test]
fn test_upcoming_birthdays_custom_days() {
    let today = monday();
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("John", "29.10.2000")).unwrap();

    let service = ContactServiceImpl::new(&mut book);
    assert_eq!(
        service.get_upcoming_birthdays_from(today, 7),
        NO_UPCOMING_BIRTHDAYS
    );
    assert_eq!(service.get_upcoming_birthdays_from(today, 14), "John: 29.10.2026");
}

#[test]
fn test_upcoming_birthdays_skip_contacts_without_birthday() {
    let mut book = sorting_book();
    let service = ContactServiceImpl::new(&mut book);

    let upcoming = service.calculate_upcoming_birthdays(monday(), 365);
    assert!(upcoming.iter().all(|u| u.name != "Illia"));
}

// --- Sorting ---

#[test]
fn test_list_contacts_unsorted_keeps_book_order() {
    let mut book = sorting_book();
    let service = ContactServiceImpl::new(&mut book);
    assert_eq!(names(&service.list_contacts(None)), vec!["Pavlo", "Anna", "Illia"]);
}

#[test]
fn test_list_contacts_sorted() {
    let mut book = sorting_book();
    let service = ContactServiceImpl::new(&mut book);

    let cases = [
        (ContactSortBy::Name, vec!["Anna", "Illia", "Pavlo"]),
        (ContactSortBy::Phone, vec!["Anna", "Illia", "Pavlo"]),
        (ContactSortBy::Birthday, vec!["Anna", "Pavlo", "Illia"]),
        (ContactSortBy::TagCount, vec!["Pavlo", "Anna", "Illia"]),
        (ContactSortBy::TagName, vec!["Illia", "Anna", "Pavlo"]),
    ];

    for (key, expected) in cases {
        assert_eq!(
            names(&service.list_contacts(Some(key))),
            expected,
            "sort by {}",
            key
        );
    }
}

#[test]
fn test_tag_count_ties_sort_by_name() {
    let mut book = AddressBook::new();
    for name in ["zed", "Amy", "bob"] {
        let mut record = Record::new(name);
        record.add_tag("friends").unwrap();
        book.add_record(record).unwrap();
    }
    let service = ContactServiceImpl::new(&mut book);

    assert_eq!(
        names(&service.list_contacts(Some(ContactSortBy::TagCount))),
        vec!["Amy", "bob", "zed"]
    );
}

#[test]
fn test_undated_contacts_sort_by_name_after_dated() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("zed")).unwrap();
    book.add_record(record_with_birthday("Yan", "05.05.1995")).unwrap();
    book.add_record(Record::new("Amy")).unwrap();
    let service = ContactServiceImpl::new(&mut book);

    assert_eq!(
        names(&service.list_contacts(Some(ContactSortBy::Birthday))),
        vec!["Yan", "Amy", "zed"]
    );
}

#[test]
fn test_get_all_contacts_respects_sorting() {
    let mut book = sorting_book();
    let service = ContactServiceImpl::new(&mut book);

    let output = service.get_all_contacts(Some(ContactSortBy::Name));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Contact name: Anna"));
    assert!(lines[2].starts_with("Contact name: Pavlo"));
    assert!(lines[2].ends_with("tags: ai, ml"));
}

// --- Tags ---

#[test]
fn test_add_tag_normalizes() {
    let mut book = populated_book();
    let mut service = ContactServiceImpl::new(&mut book);

    assert_eq!(service.add_tag("John", "Work").unwrap(), "Tag 'work' added to John.");
    assert_eq!(service.list_tags("John").unwrap(), vec!["work"]);
}

#[test]
fn test_remove_and_clear_tags() {
    let mut book = populated_book();
    let mut service = ContactServiceImpl::new(&mut book);
    service.add_tag("John", "work").unwrap();
    service.add_tag("John", "important").unwrap();
    service.add_tag("John", "urgent").unwrap();

    assert_eq!(
        service.remove_tag("John", "Work").unwrap(),
        "Tag 'work' removed from John."
    );
    assert_eq!(service.list_tags("John").unwrap(), vec!["important", "urgent"]);

    assert!(matches!(
        service.remove_tag("John", "work"),
        Err(BookError::NotFound(_))
    ));

    assert_eq!(service.clear_tags("John").unwrap(), "All tags cleared for John.");
    assert!(service.list_tags("John").unwrap().is_empty());
}

#[test]
fn test_tag_operations_on_missing_contact() {
    let mut book = AddressBook::new();
    let mut service = ContactServiceImpl::new(&mut book);

    assert!(matches!(service.add_tag("Ghost", "work"), Err(BookError::NotFound(_))));
    assert!(matches!(service.remove_tag("Ghost", "work"), Err(BookError::NotFound(_))));
    assert!(matches!(service.clear_tags("Ghost"), Err(BookError::NotFound(_))));
    assert!(matches!(service.list_tags("Ghost"), Err(BookError::NotFound(_))));
}

#[test]
fn test_add_invalid_tag() {
    let mut book = populated_book();
    let mut service = ContactServiceImpl::new(&mut book);

    assert!(matches!(service.add_tag("John", ""), Err(BookError::InvalidTag(_))));
    assert!(matches!(service.add_tag("John", "tag@#$"), Err(BookError::InvalidTag(_))));
    assert!(service.list_tags("John").unwrap().is_empty());
}

// --- Search ---

#[test]
fn test_search_by_phone_and_name() {
    let mut book = sorting_book();
    let service = ContactServiceImpl::new(&mut book);

    let results = service.search("1111111111", 10, 30);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Anna");
    assert_eq!(results[0].confidence, 100);

    let results = service.search("pavl", 10, 30);
    assert_eq!(results[0].name, "Pavlo");

    assert!(service.search("zzzzzz", 10, 30).is_empty());
}
