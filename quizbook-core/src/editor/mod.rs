//! Book editing sessions
//!
//! [`ChapterSet`] holds the chapter list and the active-chapter pointer.
//! [`BookEditor`] wraps it with the scalar fields and emits committed books
//! through a [`SessionHandler`].

mod chapter_set;
mod ops;
mod session;

pub use chapter_set::ChapterSet;
pub use ops::{parse_script, CountInput, EditOp};
pub use session::{BookEditor, Callbacks, ChapterOption, SessionHandler};
