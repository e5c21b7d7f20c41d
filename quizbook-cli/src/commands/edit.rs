//! Edit command implementation

use super::{read_book, write_book};
use anyhow::{Context, Result};
use quizbook_core::editor::parse_script;
use quizbook_core::storage::{BookStore, LocalStorage};
use quizbook_core::{BookEditor, Callbacks};
use std::io::Read;
use std::path::Path;

/// Apply an edit script to a book and save the result
///
/// Rejected edits are reported and skipped; the rest of the script still runs.
pub async fn edit(
    input: &str,
    script: &str,
    output: Option<&str>,
    library: Option<&Path>,
) -> Result<()> {
    let book = read_book(input)?;
    let ops = parse_script(&read_script(script)?)
        .with_context(|| format!("Failed to parse edit script {}", script))?;

    let total = ops.len();
    let mut editor = BookEditor::new(book);
    let mut rejected = 0;
    for (index, op) in ops.into_iter().enumerate() {
        let name = op.name();
        if let Err(e) = editor.apply(op) {
            rejected += 1;
            eprintln!("Rejected edit {} ({}): {}", index + 1, name, e);
        }
    }
    let applied = total - rejected;

    let mut saved = None;
    let mut handler = Callbacks::new(|book| saved = Some(book), || {});
    editor.submit(&mut handler);
    editor.close(&mut handler);
    drop(handler);
    let book = saved.context("Editor did not produce a book")?;

    let output = output.unwrap_or(input);
    write_book(output, &book)?;
    tracing::info!("Wrote book {} to {}", book.id, output);

    if let Some(root) = library {
        let store = BookStore::new(LocalStorage::new(root));
        store
            .save(&book)
            .await
            .with_context(|| format!("Failed to save book to library {}", root.display()))?;
        println!("Stored book {} in {}", book.id, root.display());
    }

    println!("Applied {} edits ({} rejected) -> {}", applied, rejected, output);
    Ok(())
}

/// Read the script from a file, or stdin when the path is `-`
fn read_script(path: &str) -> Result<String> {
    if path == "-" {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read edit script from stdin")?;
        return Ok(script);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to open edit script: {}", path))
}
