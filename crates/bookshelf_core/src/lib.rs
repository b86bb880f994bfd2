//! Core domain logic for Bookshelf.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{is_valid_author, parse_year, Book, BookValidationError};
pub use repo::book_repo::{BookRepository, CatalogError, CatalogResult, MemoryBookRepository};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
