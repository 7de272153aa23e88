use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// Provides abstraction over where the book lives between invocations,
/// enabling different implementations (JSON file, in-memory for tests).
pub trait BookRepository {
    /// Load the whole book. A store that does not exist yet yields an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
