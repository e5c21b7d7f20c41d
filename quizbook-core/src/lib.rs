//! Quizbook Core Library
//!
//! This crate provides the types and editing logic for books carrying
//! per-chapter question/answer lists. An editing session ([`BookEditor`])
//! works on a local copy of a [`Book`] and hands a full snapshot back to its
//! [`SessionHandler`] on submit.

pub mod config;
pub mod editor;
pub mod error;
pub mod storage;
pub mod types;

pub use config::EditorConfig;
pub use editor::{BookEditor, Callbacks, ChapterSet, EditOp, SessionHandler};
pub use error::{EditorError, ParseError, QuizbookError, Result, StorageError};
pub use types::{Book, Chapter, QuestionPair, ValidationIssue};
