//! Show command implementation

use super::read_book;
use anyhow::Result;
use quizbook_core::editor::ChapterOption;
use quizbook_core::{BookEditor, Chapter};
use serde::Serialize;

/// Book view output
#[derive(Serialize)]
struct BookView<'a> {
    id: i64,
    title: &'a str,
    description: &'a str,
    image_url: &'a str,
    chapter_count: usize,
    chapters: Vec<ChapterOption>,
    active_chapter: u32,
    active: Option<&'a Chapter>,
}

/// Display a book and the selected chapter's questions
pub fn show(input: &str, chapter: u32, json: bool) -> Result<()> {
    let book = read_book(input)?;
    let mut editor = BookEditor::new(book);
    editor.set_active_chapter(chapter);

    let view = BookView {
        id: editor.original().id,
        title: editor.title(),
        description: editor.description(),
        image_url: editor.image_url(),
        chapter_count: editor.chapter_count(),
        chapters: editor.chapter_options(),
        active_chapter: editor.active_chapter(),
        active: editor.active_chapter_view(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Title:       {}", view.title);
    if !view.description.is_empty() {
        println!("Description: {}", view.description);
    }
    if !view.image_url.is_empty() {
        println!("Image:       {}", view.image_url);
    }
    let labels: Vec<&str> = view.chapters.iter().map(|o| o.label.as_str()).collect();
    println!("Chapters:    {}", labels.join(", "));

    match view.active {
        Some(chapter) => {
            println!();
            println!("Chapter {}", chapter.number);
            for (index, pair) in chapter.pairs.iter().enumerate() {
                println!("  Question {}: {}", index + 1, pair.question);
                println!("  Answer:     {}", pair.answer);
            }
        }
        None => println!("No chapter selected"),
    }

    Ok(())
}
