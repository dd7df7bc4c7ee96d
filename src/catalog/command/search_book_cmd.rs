use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBookCommandRequest {
    pub title: String,
}

impl SearchBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBookCommandResponse {
    pub book: Option<BookDto>,
}

#[async_trait]
impl Command<SearchBookCommandRequest, SearchBookCommandResponse> for SearchBookCommand {
    async fn execute(&self, req: SearchBookCommandRequest) -> Result<SearchBookCommandResponse, CommandError> {
        let book = self.catalog_service.search_book_by_title(req.title.as_str()).await?;
        Ok(SearchBookCommandResponse { book })
    }
}
