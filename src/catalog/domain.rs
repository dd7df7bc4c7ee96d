pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

/// Catalog of books with (title, author) uniqueness and a notification for every
/// accepted mutation.
///
/// Expected negatives (duplicate add, unknown id on remove, no search match) are
/// ordinary `false`/`None` results. Storage failures propagate unchanged and no
/// notification is sent for a failed call.
///
/// Implementations do not serialize concurrent calls against each other: two
/// concurrent `add_book` calls with the same key can both pass the duplicate check.
/// Callers that share one catalog between tasks must serialize mutations themselves
/// or supply a storage collaborator that enforces the key.
#[async_trait]
pub trait CatalogService: Sync + Send {
    /// Adds the book unless one with the same title and author is already stored.
    /// On success `book.book_id` is set to the id storage assigned.
    async fn add_book(&self, book: &mut BookDto) -> LibraryResult<bool>;

    /// Removes the stored book with `book.book_id`; title and author of the
    /// argument are not consulted.
    async fn remove_book(&self, book: &BookDto) -> LibraryResult<bool>;

    async fn get_all_books(&self) -> LibraryResult<Vec<BookDto>>;

    /// First book, in storage order, whose full title matches ignoring case.
    async fn search_book_by_title(&self, title: &str) -> LibraryResult<Option<BookDto>>;
}
