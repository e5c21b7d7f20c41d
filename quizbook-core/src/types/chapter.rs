//! Chapter type holding a chapter's question/answer pairs

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// A single question together with its answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPair {
    pub question: String,
    pub answer: String,
}

impl QuestionPair {
    /// Create a new pair
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// A pair with empty question and answer text
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether either side of the pair has no text
    pub fn is_incomplete(&self) -> bool {
        self.question.trim().is_empty() || self.answer.trim().is_empty()
    }
}

/// A single chapter of a book
///
/// Content is held as one sequence of pairs, so a chapter can never have
/// more questions than answers. On the wire the pairs are split into the
/// parallel `questions` and `answers` arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChapterRecord", into = "ChapterRecord")]
pub struct Chapter {
    /// 1-based chapter number, equal to position + 1 after any resize
    pub number: u32,

    /// Ordered question/answer pairs
    pub pairs: Vec<QuestionPair>,
}

impl Chapter {
    /// Create an empty chapter
    pub fn new(number: u32) -> Self {
        Self {
            number,
            pairs: Vec::new(),
        }
    }

    /// Create a chapter with a single placeholder pair
    pub fn placeholder(number: u32, text: &str) -> Self {
        Self::new(number).with_pairs(vec![QuestionPair::new(text, text)])
    }

    /// Set the chapter content
    pub fn with_pairs(mut self, pairs: Vec<QuestionPair>) -> Self {
        self.pairs = pairs;
        self
    }

    /// Add a single pair
    pub fn add_pair(&mut self, pair: QuestionPair) {
        self.pairs.push(pair);
    }

    /// Number of question/answer pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Question texts in order
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.question.as_str())
    }

    /// Answer texts in order
    pub fn answers(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.answer.as_str())
    }
}

/// Wire form of a chapter
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChapterRecord {
    chapter_number: u32,
    #[serde(default)]
    questions: Vec<String>,
    #[serde(default)]
    answers: Vec<String>,
}

impl TryFrom<ChapterRecord> for Chapter {
    type Error = ParseError;

    fn try_from(record: ChapterRecord) -> Result<Self, Self::Error> {
        if record.questions.len() != record.answers.len() {
            return Err(ParseError::MismatchedPairs {
                chapter: record.chapter_number,
                questions: record.questions.len(),
                answers: record.answers.len(),
            });
        }

        let pairs = record
            .questions
            .into_iter()
            .zip(record.answers)
            .map(|(question, answer)| QuestionPair { question, answer })
            .collect();

        Ok(Chapter {
            number: record.chapter_number,
            pairs,
        })
    }
}

impl From<Chapter> for ChapterRecord {
    fn from(chapter: Chapter) -> Self {
        let (questions, answers) = chapter
            .pairs
            .into_iter()
            .map(|p| (p.question, p.answer))
            .unzip();

        ChapterRecord {
            chapter_number: chapter.number,
            questions,
            answers,
        }
    }
}
