pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // exact, case-sensitive match on the (title, author) duplicate key
    async fn exists_by_title_author(&self, title: &str, author: &str) -> LibraryResult<bool>;

    // first record in storage order whose full title matches ignoring case
    async fn find_by_title_ignore_case(&self, title: &str) -> LibraryResult<Option<BookEntity>>;
}
