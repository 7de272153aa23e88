mod json_book_repository;
mod traits;

pub use json_book_repository::JsonBookRepository;
pub use traits::BookRepository;
