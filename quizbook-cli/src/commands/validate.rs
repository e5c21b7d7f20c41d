//! Validate command implementation

use super::read_book;
use anyhow::{bail, Result};

/// Check a book file for content problems
pub fn validate(input: &str, strict: bool) -> Result<()> {
    let book = match read_book(input) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Invalid book file: {:#}", e);
            bail!("Validation failed for {}", input);
        }
    };

    let issues = book.validate();
    println!("Valid book file");
    println!("  Title: {}", book.title);
    println!("  Chapters: {}", book.chapters().len());
    println!("  Questions: {}", book.question_count());

    if issues.is_empty() {
        return Ok(());
    }

    println!("{} issue(s):", issues.len());
    for issue in &issues {
        println!("  - {}", issue);
    }

    if strict {
        bail!("Validation failed for {}: {} issue(s)", input, issues.len());
    }
    Ok(())
}
