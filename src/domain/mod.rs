//! Domain value objects and types.
//!
//! Type-safe wrappers for phone numbers and birthdays, plus the tag
//! normalization rules shared by contacts and notes. Value objects validate
//! at construction time so invalid data cannot be represented.

pub mod birthday;
pub mod errors;
pub mod phone;
pub mod tag;

pub use birthday::{format_date, Birthday, DATE_FORMAT};
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use tag::{is_valid_tag, normalize_tag, parse_tag, prepare_tags, split_tags_string, TagInput};
