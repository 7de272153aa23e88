//! Application service layer.
//!
//! Services contain the business logic over an address book. They provide a
//! clean boundary between the command line handlers and the data model;
//! persistence and display stay with the caller.

pub mod birthdays;
mod contact_service;
mod note_service;
pub mod sorting;

pub use birthdays::{congratulation_date, UpcomingBirthday, DEFAULT_UPCOMING_DAYS};
pub use contact_service::{
    ContactService, ContactServiceImpl, EMPTY_BOOK, NO_BIRTHDAY, NO_PHONES, NO_UPCOMING_BIRTHDAYS,
};
pub use note_service::{NoteService, NoteServiceImpl, NO_PHONE};
pub use sorting::ContactSortBy;
