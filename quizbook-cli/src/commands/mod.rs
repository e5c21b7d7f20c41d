//! CLI command implementations

mod edit;
mod list;
mod new;
mod show;
mod validate;

pub use edit::edit;
pub use list::list;
pub use new::new_book;
pub use show::show;
pub use validate::validate;

use anyhow::{Context, Result};
use quizbook_core::Book;
use std::fs;

/// Read a book from a JSON file
fn read_book(path: &str) -> Result<Book> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to open input file: {}", path))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse book {}", path))
}

/// Write a book as pretty JSON
fn write_book(path: &str, book: &Book) -> Result<()> {
    let data = serde_json::to_string_pretty(book)?;
    fs::write(path, data + "\n").with_context(|| format!("Failed to write output file: {}", path))
}
