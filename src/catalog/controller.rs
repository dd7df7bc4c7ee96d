use std::io::{BufRead, Write};
use std::sync::Arc;
use crate::catalog::command::add_book_cmd::{validate_field, AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

const MENU: &str = "Select an option:
1. Add a Book
2. Remove a Book
3. List All Books
4. Search Book by Title
5. Exit";

// ConsoleController runs the interactive menu over any line reader and writer.
// End of input ends the session the same way as choosing Exit.
pub struct ConsoleController<R: BufRead, W: Write> {
    add_cmd: AddBookCommand,
    remove_cmd: RemoveBookCommand,
    list_cmd: ListBooksCommand,
    search_cmd: SearchBookCommand,
    max_title_len: usize,
    max_author_len: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    pub fn new(config: &Configuration, catalog_service: Arc<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            add_cmd: AddBookCommand::new(config, catalog_service.clone()),
            remove_cmd: RemoveBookCommand::new(catalog_service.clone()),
            list_cmd: ListBooksCommand::new(catalog_service.clone()),
            search_cmd: SearchBookCommand::new(catalog_service),
            max_title_len: config.max_title_len,
            max_author_len: config.max_author_len,
            input,
            output,
        }
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        let mut option_error = false;
        loop {
            writeln!(self.output)?;
            if option_error {
                writeln!(self.output, "Invalid option.")?;
                option_error = false;
            }
            writeln!(self.output, "{}", MENU)?;
            writeln!(self.output)?;
            write!(self.output, "CHOICE: ")?;
            self.output.flush()?;

            let choice = match self.read_line()? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            match choice.trim() {
                "1" => self.do_add_book().await?,
                "2" => self.do_remove_book().await?,
                "3" => self.do_list_all_books().await?,
                "4" => self.do_search_book_by_title().await?,
                "5" => return Ok(()),
                other => {
                    tracing::debug!(choice = %other, "invalid menu option");
                    option_error = true;
                }
            }
        }
    }

    async fn do_add_book(&mut self) -> LibraryResult<()> {
        let title = match self.prompt_field("Book Title: ", "Title", self.max_title_len)? {
            Some(title) => title,
            None => return Ok(()),
        };
        let author = match self.prompt_field("Author: ", "Author", self.max_author_len)? {
            Some(author) => author,
            None => return Ok(()),
        };

        let res = self.add_cmd.execute(AddBookCommandRequest::new(title.as_str(), author.as_str())).await;
        match res {
            Ok(res) if res.added => writeln!(self.output, "Book Added Successfully!")?,
            Ok(_) => writeln!(self.output, "A book with this title and author already exists!")?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    async fn do_remove_book(&mut self) -> LibraryResult<()> {
        write!(self.output, "ID of Book to remove: ")?;
        self.output.flush()?;
        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(()),
        };
        let book_id = match line.trim().parse::<i64>() {
            Ok(book_id) => book_id,
            Err(_) => {
                writeln!(self.output, "Invalid Book ID.")?;
                return Ok(());
            }
        };

        let res = self.remove_cmd.execute(RemoveBookCommandRequest::new(book_id)).await;
        match res {
            Ok(res) if res.removed => writeln!(self.output, "Book Removed Successfully!")?,
            Ok(_) => writeln!(self.output, "Book not found.")?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    async fn do_list_all_books(&mut self) -> LibraryResult<()> {
        let res = self.list_cmd.execute(ListBooksCommandRequest::default()).await;
        match res {
            Ok(res) if res.books.is_empty() => {
                writeln!(self.output, "There are currently no books in the library.")?
            }
            Ok(res) => {
                writeln!(self.output, "Books in the library:")?;
                for book in res.books {
                    writeln!(self.output, "{}", book)?;
                }
            }
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    async fn do_search_book_by_title(&mut self) -> LibraryResult<()> {
        let title = match self.prompt_field("Enter the title of the book to search: ", "Title", usize::MAX)? {
            Some(title) => title,
            None => return Ok(()),
        };

        let res = self.search_cmd.execute(SearchBookCommandRequest::new(title.as_str())).await;
        match res {
            Ok(res) => match res.book {
                Some(book) => writeln!(self.output, "{}", book)?,
                None => writeln!(self.output, "No matching book found.")?,
            },
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    // asks until the value is non-empty and within max_len characters, None on end of input
    fn prompt_field(&mut self, prompt: &str, name: &str, max_len: usize) -> LibraryResult<Option<String>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
            let value = match self.read_line()? {
                Some(value) => value,
                None => return Ok(None),
            };
            if value.is_empty() {
                writeln!(self.output, "{} is required.", name)?;
                continue;
            }
            if validate_field(name, value.as_str(), max_len).is_err() {
                writeln!(self.output, "{} must be at most {} characters.", name, max_len)?;
                continue;
            }
            return Ok(Some(value));
        }
    }

    fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn report(&mut self, err: CommandError) -> LibraryResult<()> {
        tracing::error!(error = %err, "catalog command failed");
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::books::repository::memory_book_repository::InMemoryBookRepository;
    use crate::catalog::controller::ConsoleController;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::Configuration;
    use crate::gateway::memory::MemoryNotifier;

    fn build_service() -> (Arc<dyn CatalogService>, Arc<MemoryNotifier>) {
        let notifier = Arc::new(MemoryNotifier::new());
        let svc: Arc<dyn CatalogService> = Arc::new(CatalogServiceImpl::new(
            &Configuration::new("test"), Arc::new(InMemoryBookRepository::new()), notifier.clone()));
        (svc, notifier)
    }

    async fn run_session(config: &Configuration, svc: Arc<dyn CatalogService>, input: &str) -> String {
        let mut output = Vec::new();
        {
            let mut controller = ConsoleController::new(config, svc, Cursor::new(input.as_bytes()), &mut output);
            controller.run().await.expect("should run session");
        }
        String::from_utf8(output).expect("utf8 output")
    }

    #[tokio::test]
    async fn test_should_add_list_and_remove_books() {
        let (svc, notifier) = build_service();
        let input = "1\nThe Great Gatsby\nF. Scott Fitzgerald\n1\nThe Great Gatsby\nF. Scott Fitzgerald\n3\n2\n1\n3\n5\n";
        let out = run_session(&Configuration::new("test"), svc.clone(), input).await;

        assert!(out.contains("Book Added Successfully!"));
        assert!(out.contains("A book with this title and author already exists!"));
        assert!(out.contains("Books in the library:\nID: 1 Title: The Great Gatsby Author: F. Scott Fitzgerald\n"));
        assert!(out.contains("Book Removed Successfully!"));
        assert!(out.contains("There are currently no books in the library."));
        assert_eq!(vec!["Book added: The Great Gatsby", "Book removed: The Great Gatsby"], notifier.messages());
        assert!(svc.get_all_books().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_reprompt_for_required_fields() {
        let (svc, _) = build_service();
        let out = run_session(&Configuration::new("test"), svc.clone(), "1\n\n1984\n\nGeorge Orwell\n5\n").await;
        assert!(out.contains("Title is required."));
        assert!(out.contains("Author is required."));
        assert!(out.contains("Book Added Successfully!"));
        assert_eq!(1, svc.get_all_books().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_reprompt_for_long_fields() {
        let (svc, _) = build_service();
        let mut config = Configuration::new("test");
        config.max_title_len = 4;
        let out = run_session(&config, svc.clone(), "1\nAnimal Farm\n1984\nGeorge Orwell\n5\n").await;
        assert!(out.contains("Title must be at most 4 characters."));
        let all = svc.get_all_books().await.expect("should list books");
        assert_eq!(vec![BookDto { book_id: 1, title: "1984".to_string(), author: "George Orwell".to_string() }], all);
    }

    #[tokio::test]
    async fn test_should_report_invalid_inputs() {
        let (svc, notifier) = build_service();
        let out = run_session(&Configuration::new("test"), svc, "9\n2\nabc\n2\n12\n5\n").await;
        assert!(out.contains("Invalid option."));
        assert!(out.contains("Invalid Book ID."));
        assert!(out.contains("Book not found."));
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_should_search_by_title() {
        let (svc, _) = build_service();
        let _ = svc.add_book(&mut BookDto::new("1984", "George Orwell")).await.expect("should add book");
        let out = run_session(&Configuration::new("test"), svc, "4\n1984\n4\nInvisible Man\n5\n").await;
        assert!(out.contains("ID: 1 Title: 1984 Author: George Orwell"));
        assert!(out.contains("No matching book found."));
    }

    #[tokio::test]
    async fn test_should_stop_at_end_of_input() {
        let (svc, _) = build_service();
        let out = run_session(&Configuration::new("test"), svc.clone(), "1\nDune\n").await;
        assert!(out.contains("Author: "));
        assert!(out.ends_with("CHOICE: "));
        assert!(svc.get_all_books().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_accept_windows_line_endings() {
        let (svc, _) = build_service();
        let _ = run_session(&Configuration::new("test"), svc.clone(), "1\r\nDune\r\nFrank Herbert\r\n5\r\n").await;
        let found = svc.search_book_by_title("dune").await.expect("should search").expect("should find book");
        assert_eq!("Frank Herbert", found.author.as_str());
    }
}
