use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the record owned by storage; book_id is assigned on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            book_id: 0,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub(crate) fn with_id(&self, book_id: i64) -> Self {
        Self {
            book_id,
            title: self.title.clone(),
            author: self.author.clone(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}
