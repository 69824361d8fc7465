use crate::cli::SearchField;
use crate::domain::errors::LibraryError;
use crate::domain::models::{Book, Stats};

/// Ordered, append-only collection of books for one session.
///
/// Duplicate titles are allowed and nothing about a record is validated
/// beyond its year having been parsed as an integer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl Catalog {
    pub fn add(&mut self, book: Book) {
        tracing::debug!(title = %book.title, "adding book");
        self.books.push(book);
    }

    /// Removes every entry whose title matches `title` ignoring case.
    pub fn remove_by_title(&mut self, title: &str) -> usize {
        let needle = title.to_lowercase();
        let before = self.books.len();
        self.books.retain(|b| b.title.to_lowercase() != needle);
        let removed = before - self.books.len();
        tracing::debug!(title, removed, "removed by title");
        removed
    }

    pub fn search(&self, field: SearchField, query: &str) -> Vec<&Book> {
        let q = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                let value = match field {
                    SearchField::Title => &b.title,
                    SearchField::Author => &b.author,
                };
                value.to_lowercase().contains(&q)
            })
            .collect()
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn statistics(&self) -> Stats {
        let total = self.books.len();
        let read = self.books.iter().filter(|b| b.read).count();
        let percent_read = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Stats {
            total,
            read,
            percent_read,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Parses a user-entered publication year. Surrounding whitespace is ignored;
/// any range is accepted.
pub fn parse_year(raw: &str) -> Result<i32, LibraryError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| LibraryError::InvalidYear(raw.to_string()))
}
