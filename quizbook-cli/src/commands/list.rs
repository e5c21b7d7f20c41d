//! List command implementation

use anyhow::{Context, Result};
use quizbook_core::storage::{BookStore, LocalStorage};
use std::path::Path;

/// List the books stored in a library directory
pub async fn list(library: &Path) -> Result<()> {
    let store = BookStore::new(LocalStorage::new(library));
    let ids = store
        .list()
        .await
        .with_context(|| format!("Failed to list library {}", library.display()))?;

    if ids.is_empty() {
        println!("No books found in {}", library.display());
        return Ok(());
    }

    for id in ids {
        match store.load(id).await {
            Ok(book) => println!(
                "{:>6}  {}  ({} chapters)",
                book.id,
                book.title,
                book.chapters().len()
            ),
            Err(e) => tracing::error!("Failed to load book {}: {}", id, e),
        }
    }

    Ok(())
}
