//! The editable chapter sequence and its active-chapter pointer

use crate::config::DEFAULT_PLACEHOLDER;
use crate::error::EditorError;
use crate::types::{Chapter, QuestionPair};

/// Ordered chapters plus the number of the chapter selected for display
///
/// Chapters are addressed by position for edits and by chapter number for
/// display. The active pointer is never validated: if no chapter carries
/// that number, [`ChapterSet::active_chapter_view`] returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSet {
    chapters: Vec<Chapter>,
    active: u32,
    placeholder: String,
}

impl ChapterSet {
    /// Wrap existing chapters, selecting chapter 1
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters,
            active: 1,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Set the text used for chapters created by a resize
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn into_chapters(self) -> Vec<Chapter> {
        self.chapters
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Number of the selected chapter (may match no chapter)
    pub fn active_chapter(&self) -> u32 {
        self.active
    }

    /// Resize to exactly `count` chapters
    ///
    /// Chapters that survive keep their pairs; new ones get a single
    /// placeholder pair. Every chapter is renumbered to position + 1.
    pub fn set_chapter_count(&mut self, count: usize) {
        self.chapters.truncate(count);
        for (index, chapter) in self.chapters.iter_mut().enumerate() {
            chapter.number = index as u32 + 1;
        }

        let placeholder = &self.placeholder;
        let start = self.chapters.len();
        self.chapters.extend(
            (start..count).map(|index| Chapter::placeholder(index as u32 + 1, placeholder)),
        );
    }

    /// Select a chapter by number, without checking that it exists
    pub fn set_active_chapter(&mut self, number: u32) {
        self.active = number;
    }

    /// The chapter whose number matches the active pointer
    pub fn active_chapter_view(&self) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == self.active)
    }

    /// Position of the active chapter, if it exists
    pub fn active_index(&self) -> Option<usize> {
        self.chapters.iter().position(|c| c.number == self.active)
    }

    /// Replace the question text at a position
    pub fn set_question_text(
        &mut self,
        chapter: usize,
        question: usize,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.pair_mut(chapter, question)?.question = text.into();
        Ok(())
    }

    /// Replace the answer text at a position
    pub fn set_answer_text(
        &mut self,
        chapter: usize,
        question: usize,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.pair_mut(chapter, question)?.answer = text.into();
        Ok(())
    }

    /// Append an empty question/answer pair to a chapter
    pub fn add_question(&mut self, chapter: usize) -> Result<(), EditorError> {
        self.chapter_mut(chapter)?.add_pair(QuestionPair::empty());
        Ok(())
    }

    /// Remove the pair at a position, returning it
    pub fn delete_question(
        &mut self,
        chapter: usize,
        question: usize,
    ) -> Result<QuestionPair, EditorError> {
        let target = self.chapter_mut(chapter)?;
        if question >= target.pairs.len() {
            return Err(EditorError::QuestionOutOfRange {
                chapter,
                index: question,
                len: target.pairs.len(),
            });
        }
        Ok(target.pairs.remove(question))
    }

    fn chapter_mut(&mut self, index: usize) -> Result<&mut Chapter, EditorError> {
        let len = self.chapters.len();
        self.chapters
            .get_mut(index)
            .ok_or(EditorError::ChapterOutOfRange { index, len })
    }

    fn pair_mut(&mut self, chapter: usize, question: usize) -> Result<&mut QuestionPair, EditorError> {
        let target = self.chapter_mut(chapter)?;
        let len = target.pairs.len();
        target
            .pairs
            .get_mut(question)
            .ok_or(EditorError::QuestionOutOfRange {
                chapter,
                index: question,
                len,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(chapter: &Chapter) -> Vec<(&str, &str)> {
        chapter.questions().zip(chapter.answers()).collect()
    }

    fn one_chapter() -> ChapterSet {
        ChapterSet::new(vec![
            Chapter::new(1).with_pairs(vec![QuestionPair::new("Q1", "A1")])
        ])
    }

    #[test]
    fn test_grow_appends_placeholders() {
        let mut set = one_chapter();
        set.set_chapter_count(3);

        assert_eq!(set.len(), 3);
        assert_eq!(pairs(&set.chapters()[0]), vec![("Q1", "A1")]);
        assert_eq!(set.chapters()[1].number, 2);
        assert_eq!(pairs(&set.chapters()[1]), vec![("Example", "Example")]);
        assert_eq!(set.chapters()[2].number, 3);
    }

    #[test]
    fn test_shrink_drops_trailing_chapters() {
        let mut set = one_chapter();
        set.set_chapter_count(4);
        set.set_chapter_count(2);

        assert_eq!(set.len(), 2);
        assert_eq!(pairs(&set.chapters()[0]), vec![("Q1", "A1")]);
    }

    #[test]
    fn test_resize_to_zero() {
        let mut set = one_chapter();
        set.set_chapter_count(0);
        assert!(set.is_empty());
        assert!(set.active_chapter_view().is_none());
    }

    #[test]
    fn test_resize_renumbers_by_position() {
        let mut set = ChapterSet::new(vec![Chapter::new(4), Chapter::new(9)]);
        set.set_chapter_count(2);
        let numbers: Vec<u32> = set.chapters().iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_custom_placeholder() {
        let mut set = ChapterSet::new(Vec::new()).with_placeholder("TBD");
        set.set_chapter_count(1);
        assert_eq!(pairs(&set.chapters()[0]), vec![("TBD", "TBD")]);
    }

    #[test]
    fn test_active_pointer_dangles_after_shrink() {
        let mut set = one_chapter();
        set.set_chapter_count(3);
        set.set_active_chapter(3);
        assert_eq!(set.active_chapter_view().map(|c| c.number), Some(3));

        set.set_chapter_count(2);
        assert_eq!(set.active_chapter(), 3);
        assert!(set.active_chapter_view().is_none());
        assert!(set.active_index().is_none());
    }

    #[test]
    fn test_set_active_does_not_validate() {
        let mut set = one_chapter();
        set.set_active_chapter(42);
        assert_eq!(set.active_chapter(), 42);
        assert!(set.active_chapter_view().is_none());
    }

    #[test]
    fn test_set_question_and_answer() {
        let mut set = one_chapter();
        set.set_question_text(0, 0, "New Q").unwrap();
        set.set_answer_text(0, 0, "New A").unwrap();
        assert_eq!(pairs(&set.chapters()[0]), vec![("New Q", "New A")]);
    }

    #[test]
    fn test_edit_out_of_range_is_rejected() {
        let mut set = one_chapter();
        let before = set.clone();

        assert_eq!(
            set.set_question_text(1, 0, "x"),
            Err(EditorError::ChapterOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            set.set_answer_text(0, 1, "x"),
            Err(EditorError::QuestionOutOfRange {
                chapter: 0,
                index: 1,
                len: 1
            })
        );
        assert_eq!(set, before);
    }

    #[test]
    fn test_add_question_appends_empty_pair() {
        let mut set = one_chapter();
        set.add_question(0).unwrap();
        assert_eq!(pairs(&set.chapters()[0]), vec![("Q1", "A1"), ("", "")]);
    }

    #[test]
    fn test_add_question_bootstraps_empty_chapter() {
        let mut set = ChapterSet::new(vec![Chapter::new(1)]);
        set.add_question(0).unwrap();
        assert_eq!(pairs(&set.chapters()[0]), vec![("", "")]);
    }

    #[test]
    fn test_add_question_out_of_range() {
        let mut set = one_chapter();
        assert_eq!(
            set.add_question(5),
            Err(EditorError::ChapterOutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn test_delete_question_shifts_later_pairs() {
        let mut set = ChapterSet::new(vec![
            Chapter::new(1).with_pairs(vec![
                QuestionPair::new("Q1", "A1"),
                QuestionPair::new("Q2", "A2"),
                QuestionPair::new("Q3", "A3"),
            ]),
            Chapter::new(2).with_pairs(vec![QuestionPair::new("Other", "Other")]),
        ]);

        let removed = set.delete_question(0, 1).unwrap();
        assert_eq!(removed, QuestionPair::new("Q2", "A2"));
        assert_eq!(pairs(&set.chapters()[0]), vec![("Q1", "A1"), ("Q3", "A3")]);
        assert_eq!(pairs(&set.chapters()[1]), vec![("Other", "Other")]);
    }

    #[test]
    fn test_delete_question_out_of_range() {
        let mut set = one_chapter();
        let before = set.clone();
        assert_eq!(
            set.delete_question(0, 3),
            Err(EditorError::QuestionOutOfRange {
                chapter: 0,
                index: 3,
                len: 1
            })
        );
        assert_eq!(set, before);
    }
}
