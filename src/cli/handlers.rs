//! Command handlers: run one parsed command against a loaded address book.

use crate::cli::Commands;
use crate::config::Config;
use crate::domain::TagInput;
use crate::error::BookResult;
use crate::matching::MatchResult;
use crate::models::{AddressBook, Note, Record};
use crate::services::{ContactService, ContactServiceImpl, NoteService, NoteServiceImpl};
use chrono::{Local, NaiveDate};
use std::fmt::Write;

const NO_TAGS: &str = "No tags";
const NO_NOTES: &str = "No notes";
const NO_MATCHES: &str = "No contacts found.";

/// Per-invocation settings: configuration defaults plus the reference date.
#[derive(Debug, Clone)]
pub struct Settings {
    pub birthday_window_days: u32,
    pub search_max_results: usize,
    pub search_min_confidence: u8,
    /// Date birthdays are counted from.
    pub today: NaiveDate,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            birthday_window_days: config.birthday_window_days,
            search_max_results: config.search_max_results,
            search_min_confidence: config.search_min_confidence,
            today: Local::now().date_naive(),
        }
    }
}

/// Text to print and whether the book needs saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub modified: bool,
}

impl CommandOutput {
    fn changed(text: String) -> Self {
        Self {
            text,
            modified: true,
        }
    }

    fn unchanged(text: String) -> Self {
        Self {
            text,
            modified: false,
        }
    }
}

/// Execute `command` against `book`.
///
/// Errors leave the book unchanged and are returned for the caller to report.
pub fn execute(
    command: &Commands,
    book: &mut AddressBook,
    settings: &Settings,
) -> BookResult<CommandOutput> {
    let output = match command {
        Commands::Add { name, phone } => {
            CommandOutput::changed(ContactServiceImpl::new(book).add_contact(name, phone)?)
        }
        Commands::Change {
            name,
            old_phone,
            new_phone,
        } => CommandOutput::changed(
            ContactServiceImpl::new(book).change_contact(name, old_phone, new_phone)?,
        ),
        Commands::Phone { name } => {
            CommandOutput::unchanged(ContactServiceImpl::new(book).get_phone(name)?)
        }
        Commands::RemovePhone { name, phone } => {
            CommandOutput::changed(ContactServiceImpl::new(book).remove_phone(name, phone)?)
        }
        Commands::Delete { name } => {
            CommandOutput::changed(ContactServiceImpl::new(book).delete_contact(name)?)
        }
        Commands::All { sort_by } => {
            CommandOutput::unchanged(ContactServiceImpl::new(book).get_all_contacts(*sort_by))
        }
        Commands::AddBirthday { name, birthday } => {
            CommandOutput::changed(ContactServiceImpl::new(book).add_birthday(name, birthday)?)
        }
        Commands::ShowBirthday { name } => {
            CommandOutput::unchanged(ContactServiceImpl::new(book).get_birthday(name)?)
        }
        Commands::Birthdays { days } => {
            let days = days.unwrap_or(settings.birthday_window_days);
            CommandOutput::unchanged(
                ContactServiceImpl::new(book).get_upcoming_birthdays_from(settings.today, days),
            )
        }
        Commands::Search { query, limit } => {
            let limit = limit.unwrap_or(settings.search_max_results);
            let service = ContactServiceImpl::new(book);
            let matches = service.search(query, limit, settings.search_min_confidence);
            CommandOutput::unchanged(format_matches(&matches))
        }
        Commands::TagAdd { name, tag } => {
            CommandOutput::changed(ContactServiceImpl::new(book).add_tag(name, tag)?)
        }
        Commands::TagRemove { name, tag } => {
            CommandOutput::changed(ContactServiceImpl::new(book).remove_tag(name, tag)?)
        }
        Commands::TagClear { name } => {
            CommandOutput::changed(ContactServiceImpl::new(book).clear_tags(name)?)
        }
        Commands::TagList { name } => {
            CommandOutput::unchanged(format_tags(&ContactServiceImpl::new(book).list_tags(name)?))
        }
        Commands::FindByTags { tags } => {
            let service = ContactServiceImpl::new(book);
            let found = service.find_by_tags_all(TagInput::from(tags.as_str()))?;
            CommandOutput::unchanged(format_records(&found))
        }
        Commands::FindByTagsAny { tags } => {
            let service = ContactServiceImpl::new(book);
            let found = service.find_by_tags_any(TagInput::from(tags.as_str()))?;
            CommandOutput::unchanged(format_records(&found))
        }
        Commands::NoteAdd {
            name,
            note,
            content,
        } => CommandOutput::changed(NoteServiceImpl::new(book).add_note(name, note, content)?),
        Commands::NoteEdit {
            name,
            note,
            content,
        } => CommandOutput::changed(NoteServiceImpl::new(book).edit_note(name, note, content)?),
        Commands::NoteDelete { name, note } => {
            CommandOutput::changed(NoteServiceImpl::new(book).delete_note(name, note)?)
        }
        Commands::NoteList { name } => {
            let service = NoteServiceImpl::new(book);
            let notes = service.list_notes(name)?;
            if notes.is_empty() {
                CommandOutput::unchanged(NO_NOTES.to_string())
            } else {
                let lines: Vec<String> = notes.into_iter().map(format_note_line).collect();
                CommandOutput::unchanged(lines.join("\n"))
            }
        }
        Commands::NoteShow { name, note } => {
            let service = NoteServiceImpl::new(book);
            CommandOutput::unchanged(format_note(service.get_note(name, note)?))
        }
        Commands::NoteTagAdd { name, note, tag } => {
            CommandOutput::changed(NoteServiceImpl::new(book).note_add_tag(name, note, tag)?)
        }
        Commands::NoteTagRemove { name, note, tag } => {
            CommandOutput::changed(NoteServiceImpl::new(book).note_remove_tag(name, note, tag)?)
        }
        Commands::NoteTagClear { name, note } => {
            CommandOutput::changed(NoteServiceImpl::new(book).note_clear_tags(name, note)?)
        }
        Commands::NoteTagList { name, note } => CommandOutput::unchanged(format_tags(
            &NoteServiceImpl::new(book).note_list_tags(name, note)?,
        )),
    };
    Ok(output)
}

fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        NO_TAGS.to_string()
    } else {
        tags.join(", ")
    }
}

fn format_records(records: &[(&str, &Record)]) -> String {
    if records.is_empty() {
        return NO_MATCHES.to_string();
    }
    records
        .iter()
        .map(|(_, record)| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_matches(matches: &[MatchResult<'_>]) -> String {
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }
    matches
        .iter()
        .map(|m| format!("{} [{}%]", m.record, m.confidence))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_note_line(note: &Note) -> String {
    let mut line = note.name.clone();
    if !note.content.is_empty() {
        let _ = write!(line, ": {}", note.content);
    }
    if !note.tags().is_empty() {
        let _ = write!(line, " [{}]", note.tags_list().join(", "));
    }
    line
}

fn format_note(note: &Note) -> String {
    format!(
        "Note: {}\nContent: {}\nTags: {}",
        note.name,
        note.content,
        format_tags(&note.tags_list())
    )
}
