use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::InMemoryBookRepository;

pub fn create_book_repository() -> Arc<dyn BookRepository> {
    Arc::new(InMemoryBookRepository::new())
}
