use tokio::runtime::{Builder, Runtime};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;

/// Blocking form of a [`CatalogService`].
///
/// Every call drives the suspending operation to completion on the calling thread
/// through a private current-thread runtime, so both forms share one implementation
/// and produce the same results and notifications in the same order.
///
/// Calling these methods from inside an async context panics (tokio refuses to
/// block a runtime thread); async callers use the wrapped service directly.
pub struct BlockingCatalogService {
    inner: Box<dyn CatalogService>,
    runtime: Runtime,
}

impl BlockingCatalogService {
    pub fn new(inner: Box<dyn CatalogService>) -> LibraryResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { inner, runtime })
    }

    pub fn add_book(&self, book: &mut BookDto) -> LibraryResult<bool> {
        self.runtime.block_on(self.inner.add_book(book))
    }

    pub fn remove_book(&self, book: &BookDto) -> LibraryResult<bool> {
        self.runtime.block_on(self.inner.remove_book(book))
    }

    pub fn get_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.runtime.block_on(self.inner.get_all_books())
    }

    pub fn search_book_by_title(&self, title: &str) -> LibraryResult<Option<BookDto>> {
        self.runtime.block_on(self.inner.search_book_by_title(title))
    }

    pub fn into_inner(self) -> Box<dyn CatalogService> {
        self.inner
    }
}
