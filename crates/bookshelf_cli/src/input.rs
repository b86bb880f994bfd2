//! Bounded-retry field collection for the interactive shell.
//!
//! # Responsibility
//! - Prompt the operator for one field value at a time.
//! - Reprompt on invalid input, giving up after a fixed attempt budget.
//!
//! # Invariants
//! - Exhausted retries and EOF both yield `Ok(None)`, never an error; the
//!   caller aborts the current operation and returns to the menu.
//! - Field rules match the core validation predicates, so a collected
//!   value passes the store's checks (empty author excepted, see below).

use bookshelf_core::{is_valid_author, parse_year};
use std::io::{self, BufRead, Write};

/// Attempt budget per field before the collector gives up.
pub const MAX_ATTEMPTS: u32 = 3;

/// Prints `prompt`, flushes, and reads one line from `input`.
///
/// Returns `Ok(None)` on EOF. The trailing newline is stripped; interior
/// whitespace is preserved verbatim.
pub fn read_prompted_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Collects a non-empty book title, up to [`MAX_ATTEMPTS`] tries.
pub fn collect_title<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    for _ in 0..MAX_ATTEMPTS {
        match read_prompted_line(input, output, "Enter the book title: ")? {
            None => return Ok(None),
            Some(title) if !title.is_empty() => return Ok(Some(title)),
            Some(_) => writeln!(output, "The title cannot be empty.")?,
        }
    }
    Ok(None)
}

/// Collects an author name containing only letters and whitespace.
///
/// The empty string passes the character-class rule here; the store's
/// non-empty check at insert time is the backstop for that case.
pub fn collect_author<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    for _ in 0..MAX_ATTEMPTS {
        match read_prompted_line(input, output, "Enter the book author: ")? {
            None => return Ok(None),
            Some(author) if is_valid_author(&author) => return Ok(Some(author)),
            Some(_) => {
                writeln!(output, "The author must contain only letters and spaces.")?;
            }
        }
    }
    Ok(None)
}

/// Collects a strictly positive publication year from a digit string.
pub fn collect_year<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<u32>> {
    for _ in 0..MAX_ATTEMPTS {
        match read_prompted_line(input, output, "Enter the publication year: ")? {
            None => return Ok(None),
            Some(raw) => match parse_year(&raw) {
                Some(year) => return Ok(Some(year)),
                None => {
                    writeln!(output, "The publication year must be a positive integer.")?;
                }
            },
        }
    }
    Ok(None)
}
