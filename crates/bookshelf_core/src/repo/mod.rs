//! Catalog store layer.
//!
//! # Responsibility
//! - Define the use-case oriented store contract for book records.
//! - Keep sequence/ordering details behind the repository boundary.
//!
//! # Invariants
//! - Store writes must enforce `Book::validate()` before mutation.
//! - Store APIs return semantic errors (`NotFound`) rather than sentinels.

pub mod book_repo;
