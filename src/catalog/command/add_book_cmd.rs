use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
    max_title_len: usize,
    max_author_len: usize,
}

impl AddBookCommand {
    pub fn new(config: &Configuration, catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
            max_title_len: config.max_title_len,
            max_author_len: config.max_author_len,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str())
    }

    // front-end rules: both fields required and bounded, the catalog itself takes anything
    pub fn validate(&self, max_title_len: usize, max_author_len: usize) -> LibraryResult<()> {
        validate_field("title", self.title.as_str(), max_title_len)?;
        validate_field("author", self.author.as_str(), max_author_len)
    }
}

pub fn validate_field(name: &str, value: &str, max_len: usize) -> LibraryResult<()> {
    if value.is_empty() {
        return Err(LibraryError::validation(format!("{} is required", name).as_str(), None));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(LibraryError::validation(
            format!("{} is {} characters, at most {} allowed", name, len, max_len).as_str(), None));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub added: bool,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(added: bool, book: BookDto) -> Self {
        Self {
            added,
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        req.validate(self.max_title_len, self.max_author_len)?;
        let mut book = req.build_book();
        let added = self.catalog_service.add_book(&mut book).await?;
        Ok(AddBookCommandResponse::new(added, book))
    }
}
