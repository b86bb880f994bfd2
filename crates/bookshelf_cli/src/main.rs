//! Interactive catalog entry point.
//!
//! # Responsibility
//! - Bootstrap logging, build the in-memory catalog, run the shell.
//! - Keep stdout reserved for the interactive transcript.

mod input;
mod shell;

use bookshelf_core::{default_log_level, init_logging, CatalogService, MemoryBookRepository};
use shell::Shell;
use std::io;

fn main() {
    let level =
        std::env::var("BOOKSHELF_LOG").unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level) {
        // The catalog still works without diagnostics.
        eprintln!("logging disabled: {err}");
    }

    let mut service = CatalogService::new(MemoryBookRepository::new());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    if let Err(err) = shell.run(&mut service) {
        eprintln!("shell I/O error: {err}");
        std::process::exit(1);
    }
}
