//! Book domain model.
//!
//! # Responsibility
//! - Define the catalog record (title, author, publication year).
//! - Provide the field validation enforced by the store at insert time.
//! - Expose field predicates reused by the interactive shell.
//!
//! # Invariants
//! - A `Book` is immutable once constructed; there is no edit operation.
//! - `validate()` is the single definition of what a well-formed record is.
//! - Author text is restricted to letters and whitespace (Unicode-aware).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static AUTHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Alphabetic}\s]+$").expect("valid author regex"));

/// Validation failure for a single book field.
///
/// One variant per field rule, checked in declaration order by
/// [`Book::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Author is empty or whitespace-only.
    EmptyAuthor,
    /// Author contains characters other than letters and whitespace.
    InvalidAuthor(String),
    /// Publication year is not strictly positive.
    InvalidYear(u32),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "book title cannot be empty"),
            Self::EmptyAuthor => write!(f, "book author cannot be empty"),
            Self::InvalidAuthor(value) => {
                write!(f, "book author `{value}` must contain only letters and spaces")
            }
            Self::InvalidYear(value) => {
                write!(f, "publication year {value} must be a positive integer")
            }
        }
    }
}

impl Error for BookValidationError {}

/// Canonical catalog record.
///
/// No identifier field: the catalog distinguishes records by title during
/// lookup, and duplicate titles are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Non-empty display title; lookup key (case-insensitive).
    pub title: String,
    /// Letters-and-whitespace author name.
    pub author: String,
    /// Strictly positive publication year.
    pub year: u32,
}

impl Book {
    /// Creates a book without validating it.
    ///
    /// The store enforces invariants at insert time, so transient records
    /// built from raw operator input stay representable.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Checks all field rules, first failure wins.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyAuthor` for blank required fields.
    /// - `InvalidAuthor` when the author contains non-letter characters.
    /// - `InvalidYear` when the year is zero.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if !is_valid_author(&self.author) {
            return Err(BookValidationError::InvalidAuthor(self.author.clone()));
        }
        if self.year == 0 {
            return Err(BookValidationError::InvalidYear(self.year));
        }
        Ok(())
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (author: {}, year: {})",
            self.title, self.author, self.year
        )
    }
}

/// Returns whether every character of `value` is a letter or whitespace.
///
/// The empty string passes the character-class rule; the non-empty
/// requirement is a separate check owned by [`Book::validate`].
pub fn is_valid_author(value: &str) -> bool {
    value.is_empty() || AUTHOR_RE.is_match(value)
}

/// Parses a publication year from raw operator input.
///
/// Accepts only unsigned digit strings (no sign, no surrounding text) that
/// convert to a strictly positive integer; returns `None` otherwise.
pub fn parse_year(value: &str) -> Option<u32> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match value.parse::<u32>() {
        Ok(year) if year > 0 => Some(year),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_author, parse_year};

    #[test]
    fn author_predicate_accepts_unicode_letters_and_spaces() {
        assert!(is_valid_author("Ursula K Le Guin"));
        assert!(is_valid_author("Gabriel García Márquez"));
        assert!(is_valid_author(""));
    }

    #[test]
    fn author_predicate_rejects_digits_and_punctuation() {
        assert!(!is_valid_author("Orwell 1984"));
        assert!(!is_valid_author("O'Brien"));
    }

    #[test]
    fn parse_year_accepts_only_positive_digit_strings() {
        assert_eq!(parse_year("1949"), Some(1949));
        assert_eq!(parse_year("0"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("+5"), None);
        assert_eq!(parse_year("-3"), None);
        assert_eq!(parse_year("19x9"), None);
    }
}
