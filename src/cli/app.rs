//! Main CLI application structure

use crate::services::ContactSortBy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(author, version, about = "Personal address book: contacts, birthdays, tags and notes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Address book file (overrides CONTACTS_FILE)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact, or another phone to an existing contact
    Add {
        name: String,
        phone: String,
    },

    /// Replace one phone of a contact
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phones
    Phone { name: String },

    /// Remove one phone from a contact
    RemovePhone { name: String, phone: String },

    /// Delete a contact
    Delete { name: String },

    /// List all contacts
    All {
        /// Sort key: name, phone, birthday, tag_count, tag_name
        #[arg(long)]
        sort_by: Option<ContactSortBy>,
    },

    /// Set a contact's birthday (DD.MM.YYYY)
    AddBirthday { name: String, birthday: String },

    /// Show a contact's birthday
    ShowBirthday { name: String },

    /// Show birthdays in the coming days
    Birthdays {
        /// Window in days (overrides BIRTHDAY_WINDOW_DAYS)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Search contacts by name or phone fragment
    Search {
        query: String,

        /// Maximum number of results (overrides SEARCH_MAX_RESULTS)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Tag a contact
    TagAdd { name: String, tag: String },

    /// Remove a tag from a contact
    TagRemove { name: String, tag: String },

    /// Remove every tag from a contact
    TagClear { name: String },

    /// List a contact's tags
    TagList { name: String },

    /// Contacts carrying all of the given tags (comma-separated)
    FindByTags { tags: String },

    /// Contacts carrying any of the given tags (comma-separated)
    FindByTagsAny { tags: String },

    /// Add a note to a contact
    NoteAdd {
        name: String,
        note: String,
        #[arg(default_value = "")]
        content: String,
    },

    /// Replace a note's content
    NoteEdit {
        name: String,
        note: String,
        content: String,
    },

    /// Delete a note
    NoteDelete { name: String, note: String },

    /// List a contact's notes
    NoteList { name: String },

    /// Show one note
    NoteShow { name: String, note: String },

    /// Tag a note
    NoteTagAdd {
        name: String,
        note: String,
        tag: String,
    },

    /// Remove a tag from a note
    NoteTagRemove {
        name: String,
        note: String,
        tag: String,
    },

    /// Remove every tag from a note
    NoteTagClear { name: String, note: String },

    /// List a note's tags
    NoteTagList { name: String, note: String },
}

impl Commands {
    /// Whether a successful run of this command changes the book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. }
                | Commands::Change { .. }
                | Commands::RemovePhone { .. }
                | Commands::Delete { .. }
                | Commands::AddBirthday { .. }
                | Commands::TagAdd { .. }
                | Commands::TagRemove { .. }
                | Commands::TagClear { .. }
                | Commands::NoteAdd { .. }
                | Commands::NoteEdit { .. }
                | Commands::NoteDelete { .. }
                | Commands::NoteTagAdd { .. }
                | Commands::NoteTagRemove { .. }
                | Commands::NoteTagClear { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sort_by() {
        let cli = Cli::try_parse_from(["contacts", "all", "--sort-by", "tag-count"]).unwrap();
        match cli.command {
            Commands::All { sort_by } => assert_eq!(sort_by, Some(ContactSortBy::TagCount)),
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from(["contacts", "all", "--sort-by", "age"]).is_err());
    }

    #[test]
    fn test_note_add_content_is_optional() {
        let cli = Cli::try_parse_from(["contacts", "note-add", "John", "todo"]).unwrap();
        match cli.command {
            Commands::NoteAdd { content, .. } => assert_eq!(content, ""),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_file_flag() {
        let cli = Cli::try_parse_from(["contacts", "phone", "John", "--file", "x.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
        assert!(!cli.command.is_mutating());
    }
}
