//! New command implementation

use super::write_book;
use anyhow::Result;
use quizbook_core::{Book, BookEditor};

/// Create a book file the way the editor would save it
pub fn new_book(
    id: i64,
    title: &str,
    description: Option<&str>,
    image_url: Option<&str>,
    chapters: Option<&str>,
    output: &str,
) -> Result<()> {
    let mut editor = BookEditor::new(Book::new(id, title));

    if let Some(description) = description {
        editor.set_description(description);
    }
    if let Some(image_url) = image_url {
        editor.set_image_url(image_url);
    }
    if let Some(raw) = chapters {
        editor.set_chapter_count_input(raw);
    }

    let book = editor.commit();
    write_book(output, &book)?;

    tracing::info!("Created book {} with {} chapters", book.id, book.chapters().len());
    println!("Created '{}' -> {}", book.title, output);
    Ok(())
}
