//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide insert/lookup/list APIs over the in-memory catalog sequence.
//! - Enforce record validation on every write path.
//!
//! # Invariants
//! - Insertion order is preserved; the catalog is append-only.
//! - A failed insert leaves the catalog unchanged.
//! - Title lookup is case-insensitive exact match; the first inserted
//!   match wins when duplicates share a title.

use crate::model::book::{Book, BookValidationError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Store error for catalog insert and lookup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Record failed required-field checks at insert time.
    Validation(BookValidationError),
    /// No record matched the searched title.
    NotFound(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(title) => write!(f, "no book found with the title '{title}'"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<BookValidationError> for CatalogError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for catalog operations.
///
/// No update or delete exists in this domain; the trait mirrors that.
pub trait BookRepository {
    /// Validates and appends a book to the end of the catalog.
    fn insert(&mut self, book: Book) -> CatalogResult<()>;

    /// Finds the first book whose title matches case-insensitively.
    fn find_by_title(&self, title: &str) -> CatalogResult<&Book>;

    /// Lists all books in insertion order.
    ///
    /// An empty slice is the distinct empty-catalog signal; callers decide
    /// how to surface it.
    fn books(&self) -> &[Book];

    fn len(&self) -> usize {
        self.books().len()
    }

    fn is_empty(&self) -> bool {
        self.books().is_empty()
    }
}

/// Vec-backed in-memory book repository.
///
/// Linear scan is intentional: catalogs are tiny and the domain has no
/// uniqueness invariant an index could key on.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<Book>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepository for MemoryBookRepository {
    fn insert(&mut self, book: Book) -> CatalogResult<()> {
        book.validate()?;
        info!(
            "event=book_inserted module=repo status=ok title_len={} year={}",
            book.title.len(),
            book.year
        );
        self.books.push(book);
        Ok(())
    }

    fn find_by_title(&self, title: &str) -> CatalogResult<&Book> {
        let needle = title.to_lowercase();
        let hit = self
            .books
            .iter()
            .find(|book| book.title.to_lowercase() == needle);
        match hit {
            Some(book) => {
                debug!("event=book_lookup module=repo status=hit");
                Ok(book)
            }
            None => {
                debug!("event=book_lookup module=repo status=miss");
                Err(CatalogError::NotFound(title.to_string()))
            }
        }
    }

    fn books(&self) -> &[Book] {
        &self.books
    }
}
