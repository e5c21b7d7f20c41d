//! Core types shared by the editor, storage and front ends

mod book;
mod chapter;

pub use book::{Book, ValidationIssue};
pub use chapter::{Chapter, QuestionPair};
