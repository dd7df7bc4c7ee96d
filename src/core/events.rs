use std::fmt;
use std::fmt::{Display, Formatter};

// CatalogEvent describes a successful catalog mutation; its display form is the
// notification message handed to the notifier.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CatalogEvent {
    Added { title: String },
    Removed { title: String },
}

impl CatalogEvent {
    pub fn added(title: &str) -> Self {
        CatalogEvent::Added { title: title.to_string() }
    }

    pub fn removed(title: &str) -> Self {
        CatalogEvent::Removed { title: title.to_string() }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for CatalogEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogEvent::Added { title } => write!(f, "Book added: {}", title),
            CatalogEvent::Removed { title } => write!(f, "Book removed: {}", title),
        }
    }
}
