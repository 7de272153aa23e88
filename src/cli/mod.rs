//! # Command-Line Interface
//!
//! The `contacts` command tree and its handlers.
//!
//! ## Command Groups
//!
//! | Group | Examples |
//! |-------|----------|
//! | Contacts | `add`, `change`, `phone`, `delete`, `all` |
//! | Birthdays | `add-birthday`, `show-birthday`, `birthdays` |
//! | Tags | `tag-add`, `tag-list`, `find-by-tags`, `find-by-tags-any` |
//! | Notes | `note-add`, `note-show`, `note-tag-add` |
//! | Search | `search` |
//!
//! Every invocation loads the book from `--file` (or `CONTACTS_FILE`), runs
//! one command and saves the book again if the command changed it.

mod app;
mod handlers;

pub use app::{Cli, Commands};
pub use handlers::{execute, CommandOutput, Settings};
