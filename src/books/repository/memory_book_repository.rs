use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
struct BookTable {
    next_id: i64,
    records: Vec<BookEntity>,
}

// InMemoryBookRepository keeps books in insertion order and hands out increasing ids
// starting at 1; ids are never reused. Each call takes the lock once, so every call is
// atomic. Duplicate and title lookups are linear scans.
#[derive(Debug)]
pub struct InMemoryBookRepository {
    table: RwLock<BookTable>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub(crate) fn starting_at(next_id: i64) -> Self {
        Self {
            table: RwLock::new(BookTable { next_id, records: vec![] }),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity> for InMemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut table = self.table.write().await;
        let book_id = table.next_id;
        let next_id = book_id.checked_add(1).ok_or_else(|| LibraryError::database(
            "book id space exhausted", Some("ID_OVERFLOW".to_string()), false))?;
        let stored = entity.with_id(book_id);
        table.records.push(stored.clone());
        table.next_id = next_id;
        Ok(stored)
    }

    async fn get(&self, id: i64) -> LibraryResult<Option<BookEntity>> {
        let table = self.table.read().await;
        Ok(table.records.iter().find(|b| b.book_id == id).cloned())
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let mut table = self.table.write().await;
        let before = table.records.len();
        table.records.retain(|b| b.book_id != id);
        Ok(before - table.records.len())
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let table = self.table.read().await;
        Ok(table.records.clone())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn exists_by_title_author(&self, title: &str, author: &str) -> LibraryResult<bool> {
        let table = self.table.read().await;
        Ok(table.records.iter().any(|b| b.has_same_key(title, author)))
    }

    async fn find_by_title_ignore_case(&self, title: &str) -> LibraryResult<Option<BookEntity>> {
        let table = self.table.read().await;
        Ok(table.records.iter().find(|b| b.has_title_ignore_case(title)).cloned())
    }
}
