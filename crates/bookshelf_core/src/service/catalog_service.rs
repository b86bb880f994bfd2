//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for shell callers.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Service layer remains storage-agnostic.

use crate::model::book::Book;
use crate::repo::book_repo::{BookRepository, CatalogResult};
use log::info;

/// Use-case service wrapper for catalog operations.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a book through repository validation and insertion.
    ///
    /// # Contract
    /// - Delegates field checks to the store; a rejected record leaves the
    ///   catalog unchanged.
    pub fn add_book(&mut self, book: Book) -> CatalogResult<()> {
        self.repo.insert(book)?;
        info!(
            "event=book_added module=service status=ok catalog_len={}",
            self.repo.len()
        );
        Ok(())
    }

    /// Finds the first book matching `title` case-insensitively.
    pub fn find_by_title(&self, title: &str) -> CatalogResult<&Book> {
        self.repo.find_by_title(title)
    }

    /// Lists all books in insertion order.
    pub fn list_books(&self) -> &[Book] {
        self.repo.books()
    }

    /// Returns the number of books currently in the catalog.
    pub fn book_count(&self) -> usize {
        self.repo.len()
    }
}
