use crate::cli::SearchField;
use crate::domain::models::Book;
use crate::services::catalog::{parse_year, Catalog};
use crate::services::output::{book_line, stats_lines};
use crate::services::storage;
use std::io::{BufRead, Write};
use std::path::Path;

const MENU: &[&str] = &[
    "",
    "Menu",
    "Welcome to your Personal Library Manager!",
    "1. Add a book",
    "2. Remove a book",
    "3. Search for a book",
    "4. Display all books",
    "5. Display statistics",
    "6. Exit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    List,
    Stats,
    Exit,
    Unknown(String),
}

impl MenuChoice {
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::Remove,
            "3" => MenuChoice::Search,
            "4" => MenuChoice::List,
            "5" => MenuChoice::Stats,
            "6" => MenuChoice::Exit,
            other => MenuChoice::Unknown(other.to_string()),
        }
    }
}

/// Where the shell goes after handling one menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Menu,
    Exit,
    EndOfInput,
}

/// Interactive menu loop over one catalog. Input and output are injected so
/// the loop can be driven by scripted input.
pub struct Shell<'a, R, W> {
    catalog: &'a mut Catalog,
    path: &'a Path,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, path: &'a Path, input: R, out: W) -> Self {
        Self {
            catalog,
            path,
            input,
            out,
        }
    }

    /// Runs until option 6 (catalog saved) or end of input (nothing saved).
    pub fn run(&mut self) -> anyhow::Result<Transition> {
        loop {
            for line in MENU {
                writeln!(self.out, "{}", line)?;
            }
            let Some(token) = self.prompt("Enter your choice: ")? else {
                tracing::warn!("input closed, leaving without saving");
                return Ok(Transition::EndOfInput);
            };
            let choice = MenuChoice::parse(&token);
            tracing::debug!(?choice, "menu selection");
            match self.dispatch(choice)? {
                Transition::Menu => continue,
                done => return Ok(done),
            }
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Transition> {
        match choice {
            MenuChoice::Add => self.add_book(),
            MenuChoice::Remove => self.remove_book(),
            MenuChoice::Search => self.search_books(),
            MenuChoice::List => {
                self.display_books()?;
                Ok(Transition::Menu)
            }
            MenuChoice::Stats => {
                for line in stats_lines(&self.catalog.statistics()) {
                    writeln!(self.out, "{}", line)?;
                }
                Ok(Transition::Menu)
            }
            MenuChoice::Exit => {
                storage::save(self.path, self.catalog.list_all())?;
                writeln!(self.out, "Library saved to file. Goodbye!")?;
                Ok(Transition::Exit)
            }
            MenuChoice::Unknown(token) => {
                tracing::debug!(token = %token, "unrecognized menu choice");
                writeln!(self.out, "Invalid choice. Please try again.")?;
                Ok(Transition::Menu)
            }
        }
    }

    fn add_book(&mut self) -> anyhow::Result<Transition> {
        let Some(title) = self.prompt("Enter the book title: ")? else {
            return Ok(Transition::EndOfInput);
        };
        let Some(author) = self.prompt("Enter the author: ")? else {
            return Ok(Transition::EndOfInput);
        };
        let Some(raw_year) = self.prompt("Enter the publication year: ")? else {
            return Ok(Transition::EndOfInput);
        };
        let year = match parse_year(&raw_year) {
            Ok(y) => y,
            Err(e) => {
                tracing::debug!("{}", e);
                writeln!(self.out, "Invalid year. Book not added.")?;
                return Ok(Transition::Menu);
            }
        };
        let Some(genre) = self.prompt("Enter the genre: ")? else {
            return Ok(Transition::EndOfInput);
        };
        let Some(answer) = self.prompt("Have you read this book? (yes/no): ")? else {
            return Ok(Transition::EndOfInput);
        };
        self.catalog.add(Book {
            title,
            author,
            year,
            genre,
            read: answer.trim().to_lowercase() == "yes",
        });
        writeln!(self.out, "Book added successfully!")?;
        Ok(Transition::Menu)
    }

    fn remove_book(&mut self) -> anyhow::Result<Transition> {
        let Some(title) = self.prompt("Enter the title of the book to remove: ")? else {
            return Ok(Transition::EndOfInput);
        };
        if self.catalog.remove_by_title(title.trim()) > 0 {
            writeln!(self.out, "Book removed successfully!")?;
        } else {
            writeln!(self.out, "Book not found.")?;
        }
        Ok(Transition::Menu)
    }

    fn search_books(&mut self) -> anyhow::Result<Transition> {
        writeln!(self.out, "Search by:\n1. Title\n2. Author")?;
        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(Transition::EndOfInput);
        };
        let Some(query) = self.prompt("Enter the search term: ")? else {
            return Ok(Transition::EndOfInput);
        };
        let field = match choice.trim() {
            "1" => SearchField::Title,
            "2" => SearchField::Author,
            _ => {
                writeln!(self.out, "Invalid choice.")?;
                return Ok(Transition::Menu);
            }
        };
        let hits = self.catalog.search(field, query.trim());
        if hits.is_empty() {
            writeln!(self.out, "No matching books found.")?;
        } else {
            writeln!(self.out, "Matching Books:")?;
            for (i, book) in hits.into_iter().enumerate() {
                writeln!(self.out, "{}", book_line(i + 1, book))?;
            }
        }
        Ok(Transition::Menu)
    }

    fn display_books(&mut self) -> anyhow::Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.out, "Your library is empty.")?;
            return Ok(());
        }
        writeln!(self.out, "Your Library:")?;
        for (i, book) in self.catalog.list_all().iter().enumerate() {
            writeln!(self.out, "{}", book_line(i + 1, book))?;
        }
        Ok(())
    }

    /// Writes `text` without a newline and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
