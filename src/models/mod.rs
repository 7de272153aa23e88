//! Data models for the address book.
//!
//! This module contains the address book itself, the contact records it
//! owns and the notes each record owns.

pub mod address_book;
pub mod note;
pub mod record;

pub use address_book::AddressBook;
pub use note::Note;
pub use record::Record;
