//! The Book type exchanged with the editor's collaborators

use super::Chapter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A book with its per-chapter questions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identifier assigned by the owning collaborator
    pub id: i64,

    /// Book title
    pub title: String,

    /// Book description/summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered list of chapters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<Chapter>>,

    /// Cover image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Book {
    /// Create a new book with the given id and title
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            chapters: None,
            image_url: None,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set image reference
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set chapters
    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = Some(chapters);
        self
    }

    /// Add a chapter to the book
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.get_or_insert_with(Vec::new).push(chapter);
    }

    /// Chapters, or an empty slice when none are set
    pub fn chapters(&self) -> &[Chapter] {
        self.chapters.as_deref().unwrap_or(&[])
    }

    /// Total number of question/answer pairs across all chapters
    pub fn question_count(&self) -> usize {
        self.chapters().iter().map(Chapter::len).sum()
    }

    /// Check the book for content problems
    ///
    /// Nothing here is fatal; an editor can still open the book.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.title.trim().is_empty() {
            issues.push(ValidationIssue::EmptyTitle);
        }

        for (index, chapter) in self.chapters().iter().enumerate() {
            let expected = index as u32 + 1;
            if chapter.number != expected {
                issues.push(ValidationIssue::ChapterNumberMismatch {
                    position: index,
                    expected,
                    found: chapter.number,
                });
            }

            if chapter.is_empty() {
                issues.push(ValidationIssue::NoQuestions {
                    chapter: chapter.number,
                });
            }

            for (question, pair) in chapter.pairs.iter().enumerate() {
                if pair.is_incomplete() {
                    issues.push(ValidationIssue::IncompletePair {
                        chapter: chapter.number,
                        question,
                    });
                }
            }
        }

        issues
    }
}

/// A content problem found by [`Book::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    EmptyTitle,
    ChapterNumberMismatch {
        position: usize,
        expected: u32,
        found: u32,
    },
    NoQuestions {
        chapter: u32,
    },
    IncompletePair {
        chapter: u32,
        question: usize,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyTitle => write!(f, "title is empty"),
            ValidationIssue::ChapterNumberMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "chapter at position {} is numbered {} (expected {})",
                position, found, expected
            ),
            ValidationIssue::NoQuestions { chapter } => {
                write!(f, "chapter {} has no questions", chapter)
            }
            ValidationIssue::IncompletePair { chapter, question } => write!(
                f,
                "chapter {} question {} is missing question or answer text",
                chapter,
                question + 1
            ),
        }
    }
}
