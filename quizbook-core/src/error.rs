//! Error types for Quizbook Core

use thiserror::Error;

/// Result type alias using QuizbookError
pub type Result<T> = std::result::Result<T, QuizbookError>;

/// Top-level error type for all Quizbook operations
#[derive(Debug, Error)]
pub enum QuizbookError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while reading books or edit scripts
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("chapter {chapter} has {questions} questions but {answers} answers")]
    MismatchedPairs {
        chapter: u32,
        questions: usize,
        answers: usize,
    },

    #[error("line {line}: {message}")]
    Script { line: usize, message: String },
}

/// Errors raised by a rejected edit
///
/// A rejected edit never changes the working state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("chapter index {index} out of range (book has {len} chapters)")]
    ChapterOutOfRange { index: usize, len: usize },

    #[error("question index {index} out of range in chapter {chapter} ({len} questions)")]
    QuestionOutOfRange {
        chapter: usize,
        index: usize,
        len: usize,
    },
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}
