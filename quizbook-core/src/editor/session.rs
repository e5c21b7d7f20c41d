//! Editing session for a single book

use super::{ChapterSet, EditOp};
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::types::{Book, Chapter, QuestionPair};
use serde::Serialize;

/// Receiver of the session's outbound events
pub trait SessionHandler {
    /// Called once per submit with the full working copy
    fn on_save(&mut self, book: Book);

    /// Called when the session is discarded
    fn on_close(&mut self);
}

/// [`SessionHandler`] built from two closures
pub struct Callbacks<S, C> {
    on_save: S,
    on_close: C,
}

impl<S, C> Callbacks<S, C>
where
    S: FnMut(Book),
    C: FnMut(),
{
    pub fn new(on_save: S, on_close: C) -> Self {
        Self { on_save, on_close }
    }
}

impl<S, C> SessionHandler for Callbacks<S, C>
where
    S: FnMut(Book),
    C: FnMut(),
{
    fn on_save(&mut self, book: Book) {
        (self.on_save)(book)
    }

    fn on_close(&mut self) {
        (self.on_close)()
    }
}

/// One entry of the active-chapter selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterOption {
    pub number: u32,
    pub label: String,
}

/// Working copy of a book being edited
///
/// Every mutation either applies fully or is rejected with an
/// [`EditorError`] and leaves the session untouched.
#[derive(Debug, Clone)]
pub struct BookEditor {
    original: Book,
    title: String,
    description: String,
    image_url: String,
    chapters: ChapterSet,
    chapter_count: usize,
    config: EditorConfig,
}

impl BookEditor {
    /// Open a session with the default configuration
    pub fn new(book: Book) -> Self {
        Self::with_config(book, EditorConfig::default())
    }

    /// Open a session
    ///
    /// A book without chapters starts with one chapter holding a single
    /// empty pair. The declared count starts at the chapter count, or 1 when
    /// the book has an empty chapter list.
    pub fn with_config(book: Book, config: EditorConfig) -> Self {
        let chapters = book.chapters.clone().unwrap_or_else(|| {
            vec![Chapter::new(1).with_pairs(vec![QuestionPair::empty()])]
        });
        let chapter_count = chapters.len().max(1);

        Self {
            title: book.title.clone(),
            description: book.description.clone().unwrap_or_default(),
            image_url: book.image_url.clone().unwrap_or_default(),
            chapters: ChapterSet::new(chapters).with_placeholder(config.placeholder.clone()),
            chapter_count,
            original: book,
            config,
        }
    }

    /// The book the session was opened with
    pub fn original(&self) -> &Book {
        &self.original
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// The declared chapter count
    pub fn chapter_count(&self) -> usize {
        self.chapter_count
    }

    pub fn chapters(&self) -> &[Chapter] {
        self.chapters.chapters()
    }

    pub fn chapter_set(&self) -> &ChapterSet {
        &self.chapters
    }

    pub fn active_chapter(&self) -> u32 {
        self.chapters.active_chapter()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        self.image_url = image_url.into();
    }

    /// Resize the chapter list, clamped to the configured limit
    pub fn set_chapter_count(&mut self, count: usize) {
        let count = count.min(self.config.max_chapters);
        tracing::debug!(from = self.chapters.len(), to = count, "Resizing chapters");
        self.chapter_count = count;
        self.chapters.set_chapter_count(count);
    }

    /// Resize from raw user input, returning the count actually used
    pub fn set_chapter_count_input(&mut self, raw: &str) -> usize {
        let count = self.config.normalize_chapter_count(raw);
        if count.to_string() != raw.trim() {
            tracing::debug!(raw, count, "Normalized chapter count input");
        }
        self.set_chapter_count(count);
        count
    }

    pub fn set_active_chapter(&mut self, number: u32) {
        self.chapters.set_active_chapter(number);
    }

    /// The chapter selected for display, if it exists
    pub fn active_chapter_view(&self) -> Option<&Chapter> {
        self.chapters.active_chapter_view()
    }

    /// Entries for the active-chapter selector
    pub fn chapter_options(&self) -> Vec<ChapterOption> {
        self.chapters
            .chapters()
            .iter()
            .map(|c| ChapterOption {
                number: c.number,
                label: format!("Chapter {}", c.number),
            })
            .collect()
    }

    pub fn set_question_text(
        &mut self,
        chapter: usize,
        question: usize,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.chapters
            .set_question_text(chapter, question, text)
            .map_err(|e| rejected("set_question", e))
    }

    pub fn set_answer_text(
        &mut self,
        chapter: usize,
        question: usize,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.chapters
            .set_answer_text(chapter, question, text)
            .map_err(|e| rejected("set_answer", e))
    }

    pub fn add_question(&mut self, chapter: usize) -> Result<(), EditorError> {
        self.chapters
            .add_question(chapter)
            .map_err(|e| rejected("add_question", e))
    }

    pub fn delete_question(&mut self, chapter: usize, question: usize) -> Result<(), EditorError> {
        self.chapters
            .delete_question(chapter, question)
            .map(|_| ())
            .map_err(|e| rejected("delete_question", e))
    }

    /// Apply a serialized edit
    pub fn apply(&mut self, op: EditOp) -> Result<(), EditorError> {
        match op {
            EditOp::SetTitle { text } => self.set_title(text),
            EditOp::SetDescription { text } => self.set_description(text),
            EditOp::SetImageUrl { text } => self.set_image_url(text),
            EditOp::SetChapterCount { count } => {
                self.set_chapter_count_input(&count.as_raw());
            }
            EditOp::SetActiveChapter { chapter } => self.set_active_chapter(chapter),
            EditOp::SetQuestion {
                chapter,
                question,
                text,
            } => self.set_question_text(chapter, question, text)?,
            EditOp::SetAnswer {
                chapter,
                question,
                text,
            } => self.set_answer_text(chapter, question, text)?,
            EditOp::AddQuestion { chapter } => self.add_question(chapter)?,
            EditOp::DeleteQuestion { chapter, question } => {
                self.delete_question(chapter, question)?
            }
        }
        Ok(())
    }

    /// Snapshot the working state as a full book
    pub fn commit(&self) -> Book {
        Book {
            id: self.original.id,
            title: self.title.clone(),
            description: Some(self.description.clone()),
            chapters: Some(self.chapters.chapters().to_vec()),
            image_url: Some(self.image_url.clone()),
        }
    }

    /// Hand the committed book to the handler
    pub fn submit<H: SessionHandler + ?Sized>(&self, handler: &mut H) {
        let book = self.commit();
        tracing::debug!(
            id = book.id,
            chapters = self.chapters.len(),
            "Submitting book"
        );
        handler.on_save(book);
    }

    /// Discard the session
    pub fn close<H: SessionHandler + ?Sized>(self, handler: &mut H) {
        tracing::debug!(id = self.original.id, "Closing editor");
        handler.on_close();
    }
}

fn rejected(op: &str, err: EditorError) -> EditorError {
    tracing::warn!(op, error = %err, "Edit rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::CountInput;

    fn sample_book() -> Book {
        Book::new(1, "T").with_chapters(vec![
            Chapter::new(1).with_pairs(vec![QuestionPair::new("Q1", "A1")])
        ])
    }

    #[test]
    fn test_open_defaults_missing_fields() {
        let editor = BookEditor::new(Book::new(9, "Bare"));

        assert_eq!(editor.title(), "Bare");
        assert_eq!(editor.description(), "");
        assert_eq!(editor.image_url(), "");
        assert_eq!(editor.chapter_count(), 1);
        assert_eq!(editor.active_chapter(), 1);
        assert_eq!(
            editor.chapters(),
            &[Chapter::new(1).with_pairs(vec![QuestionPair::empty()])]
        );
    }

    #[test]
    fn test_open_with_empty_chapter_list() {
        let editor = BookEditor::new(Book::new(2, "Empty").with_chapters(Vec::new()));
        assert!(editor.chapters().is_empty());
        assert_eq!(editor.chapter_count(), 1);
        assert!(editor.active_chapter_view().is_none());
    }

    #[test]
    fn test_chapter_count_input_is_normalized() {
        let mut editor = BookEditor::new(sample_book());

        assert_eq!(editor.set_chapter_count_input("-2"), 0);
        assert!(editor.chapters().is_empty());

        assert_eq!(editor.set_chapter_count_input("2"), 2);
        assert_eq!(editor.chapter_count(), 2);
        assert_eq!(editor.chapters().len(), 2);
    }

    #[test]
    fn test_chapter_count_is_clamped() {
        let config = EditorConfig::default().with_max_chapters(3);
        let mut editor = BookEditor::with_config(sample_book(), config);
        editor.set_chapter_count(10);
        assert_eq!(editor.chapter_count(), 3);
        assert_eq!(editor.chapters().len(), 3);
    }

    #[test]
    fn test_chapter_options() {
        let mut editor = BookEditor::new(sample_book());
        editor.set_chapter_count(2);
        assert_eq!(
            editor.chapter_options(),
            vec![
                ChapterOption {
                    number: 1,
                    label: "Chapter 1".to_string()
                },
                ChapterOption {
                    number: 2,
                    label: "Chapter 2".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_rejected_edit_keeps_session_usable() {
        let mut editor = BookEditor::new(sample_book());

        assert!(editor.delete_question(3, 0).is_err());
        assert!(editor.set_question_text(0, 7, "x").is_err());

        editor.set_title("Still editing");
        editor.set_answer_text(0, 0, "A1'").unwrap();
        assert_eq!(editor.title(), "Still editing");
        assert_eq!(editor.chapters()[0].pairs[0].answer, "A1'");
    }

    #[test]
    fn test_apply_dispatches_ops() {
        let mut editor = BookEditor::new(sample_book());
        let ops = vec![
            EditOp::SetTitle {
                text: "New".to_string(),
            },
            EditOp::SetImageUrl {
                text: "cover.png".to_string(),
            },
            EditOp::SetChapterCount {
                count: CountInput::from("2"),
            },
            EditOp::SetActiveChapter { chapter: 2 },
            EditOp::AddQuestion { chapter: 1 },
            EditOp::SetQuestion {
                chapter: 1,
                question: 1,
                text: "Q".to_string(),
            },
            EditOp::SetAnswer {
                chapter: 1,
                question: 1,
                text: "A".to_string(),
            },
        ];
        for op in ops {
            editor.apply(op).unwrap();
        }

        assert_eq!(editor.title(), "New");
        assert_eq!(editor.image_url(), "cover.png");
        let active = editor.active_chapter_view().unwrap();
        assert_eq!(active.number, 2);
        assert_eq!(
            active.pairs,
            vec![
                QuestionPair::new("Example", "Example"),
                QuestionPair::new("Q", "A")
            ]
        );
    }

    #[test]
    fn test_apply_returns_rejection() {
        let mut editor = BookEditor::new(sample_book());
        let err = editor
            .apply(EditOp::DeleteQuestion {
                chapter: 0,
                question: 5,
            })
            .unwrap_err();
        assert_eq!(
            err,
            EditorError::QuestionOutOfRange {
                chapter: 0,
                index: 5,
                len: 1
            }
        );
    }

    #[test]
    fn test_commit_keeps_original_id() {
        let mut editor = BookEditor::new(sample_book().with_description("old"));
        editor.set_description("new");

        let book = editor.commit();
        assert_eq!(book.id, 1);
        assert_eq!(book.description.as_deref(), Some("new"));
        assert_eq!(book.image_url.as_deref(), Some(""));
        assert_eq!(editor.original().description.as_deref(), Some("old"));
    }

    #[test]
    fn test_submit_and_close_invoke_handler() {
        let mut saved = Vec::new();
        let mut closed = 0;

        {
            let mut handler = Callbacks::new(|book| saved.push(book), || closed += 1);
            let mut editor = BookEditor::new(sample_book());
            editor.set_title("Saved");
            editor.submit(&mut handler);
            editor.close(&mut handler);
        }

        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Saved");
        assert_eq!(closed, 1);
    }
}
