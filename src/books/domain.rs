use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;

    // duplicate key is the exact (title, author) pair, id never takes part in it
    fn has_same_key(&self, title: &str, author: &str) -> bool {
        self.title() == title && self.author() == author
    }

    // full-title match ignoring case
    fn has_title_ignore_case(&self, title: &str) -> bool {
        self.title().to_lowercase() == title.to_lowercase()
    }
}
