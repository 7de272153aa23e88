//! Contact book - a personal address book with birthdays, tags and notes.
//!
//! The library holds the whole core; the `contacts` binary is a thin
//! command-line caller around it.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays, tags)
//! - **models**: Notes, contact records and the address book
//! - **services**: Contact and note business operations, sorting, birthdays
//! - **matching**: Scored name and phone search
//! - **repositories**: Loading and saving the address book
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **cli**: Command tree and handlers for the binary

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{Birthday, PhoneNumber, TagInput, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError};
pub use matching::{ContactMatcher, MatchResult, MatchType};
pub use models::{AddressBook, Note, Record};
pub use repositories::{BookRepository, JsonBookRepository};
pub use services::{
    ContactService, ContactServiceImpl, ContactSortBy, NoteService, NoteServiceImpl,
    UpcomingBirthday,
};
