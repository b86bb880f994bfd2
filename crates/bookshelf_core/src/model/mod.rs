//! Domain model for the catalog.
//!
//! # Responsibility
//! - Define the canonical book record used by core business logic.
//! - Host the field validation rules enforced at insert time.
//!
//! # Invariants
//! - A `Book` carries no identifier; records are distinguished by title
//!   only during lookup.
//! - Validation rules live here so store and shell share one rule set.

pub mod book;
