use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::CatalogEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::Notifier;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
    notifier: Arc<dyn Notifier>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>,
               notifier: Arc<dyn Notifier>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            notifier,
        }
    }

    fn publish(&self, event: CatalogEvent) {
        tracing::debug!(branch = %self.branch_id, event = ?event, "publishing catalog event");
        self.notifier.notify(event.message().as_str());
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &mut BookDto) -> LibraryResult<bool> {
        tracing::debug!(branch = %self.branch_id, title = %book.title, author = %book.author, "add book");
        if self.book_repository.exists_by_title_author(book.title.as_str(), book.author.as_str()).await? {
            tracing::debug!(branch = %self.branch_id, title = %book.title, "duplicate book rejected");
            return Ok(false);
        }

        let stored = self.book_repository.create(&BookEntity::from(&*book)).await?;
        book.book_id = stored.book_id;
        tracing::info!(branch = %self.branch_id, book_id = stored.book_id, title = %stored.title, "book added");
        self.publish(CatalogEvent::added(stored.title.as_str()));
        Ok(true)
    }

    async fn remove_book(&self, book: &BookDto) -> LibraryResult<bool> {
        tracing::debug!(branch = %self.branch_id, book_id = book.book_id, "remove book");
        let existing = match self.book_repository.get(book.book_id).await? {
            Some(existing) => existing,
            None => {
                tracing::debug!(branch = %self.branch_id, book_id = book.book_id, "book to remove not found");
                return Ok(false);
            }
        };

        // the record can vanish between lookup and delete when callers share the catalog
        if self.book_repository.delete(existing.book_id).await? == 0 {
            return Ok(false);
        }
        tracing::info!(branch = %self.branch_id, book_id = existing.book_id, title = %existing.title, "book removed");
        self.publish(CatalogEvent::removed(existing.title.as_str()));
        Ok(true)
    }

    async fn get_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        tracing::debug!(branch = %self.branch_id, "list books");
        let res = self.book_repository.list().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn search_book_by_title(&self, title: &str) -> LibraryResult<Option<BookDto>> {
        tracing::debug!(branch = %self.branch_id, title = %title, "search book by title");
        self.book_repository.find_by_title_ignore_case(title).await
            .map(|found| found.as_ref().map(BookDto::from))
    }
}
