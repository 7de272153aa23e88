//! JSON file storage for the address book.
//!
//! The whole book is one pretty-printed document, rewritten on every save.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Book repository backed by a single pretty-printed JSON file.
///
/// Saves go through a sibling temp file which is then renamed over the
/// target, so a failed write never leaves a half-written book behind.
#[derive(Debug, Clone)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Write `content` to `temp_path`, then rename it over the target.
    ///
    /// On failure returns the path the failing step worked on.
    fn replace_with(&self, temp_path: &Path, content: &str) -> Result<(), (PathBuf, io::Error)> {
        let write = || -> io::Result<()> {
            let mut file = fs::File::create(temp_path)?;
            file.write_all(content.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()
        };
        write().map_err(|e| (temp_path.to_path_buf(), e))?;
        fs::rename(temp_path, &self.path).map_err(|e| (self.path.clone(), e))
    }

    fn io_error(path: &Path, source: io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl BookRepository for JsonBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no address book file, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };

        let book: AddressBook = serde_json::from_str(&content)?;
        info!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Self::io_error(parent, e))?;
            }
        }

        let content = serde_json::to_string_pretty(book)?;
        let temp_path = self.temp_path();

        if let Err((path, e)) = self.replace_with(&temp_path, &content) {
            let _ = fs::remove_file(&temp_path);
            return Err(Self::io_error(&path, e));
        }

        info!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}
