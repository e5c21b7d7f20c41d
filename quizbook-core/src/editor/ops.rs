//! Serialized edit operations
//!
//! Front ends that cannot call the editor directly describe each user input
//! as an [`EditOp`]. Scripts are JSON Lines, one operation per line.

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};

/// A single user edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    SetTitle {
        text: String,
    },
    SetDescription {
        text: String,
    },
    SetImageUrl {
        text: String,
    },
    /// Raw count as typed; normalized before resizing
    SetChapterCount {
        count: CountInput,
    },
    /// 1-based chapter number
    SetActiveChapter {
        chapter: u32,
    },
    SetQuestion {
        chapter: usize,
        question: usize,
        text: String,
    },
    SetAnswer {
        chapter: usize,
        question: usize,
        text: String,
    },
    AddQuestion {
        chapter: usize,
    },
    DeleteQuestion {
        chapter: usize,
        question: usize,
    },
}

impl EditOp {
    /// Short name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            EditOp::SetTitle { .. } => "set_title",
            EditOp::SetDescription { .. } => "set_description",
            EditOp::SetImageUrl { .. } => "set_image_url",
            EditOp::SetChapterCount { .. } => "set_chapter_count",
            EditOp::SetActiveChapter { .. } => "set_active_chapter",
            EditOp::SetQuestion { .. } => "set_question",
            EditOp::SetAnswer { .. } => "set_answer",
            EditOp::AddQuestion { .. } => "add_question",
            EditOp::DeleteQuestion { .. } => "delete_question",
        }
    }
}

/// Chapter count as entered, either a JSON number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountInput {
    Number(f64),
    Text(String),
}

impl CountInput {
    /// The input as the text a user would have typed
    pub fn as_raw(&self) -> String {
        match self {
            CountInput::Number(n) => n.to_string(),
            CountInput::Text(s) => s.clone(),
        }
    }
}

impl From<usize> for CountInput {
    fn from(count: usize) -> Self {
        CountInput::Number(count as f64)
    }
}

impl From<&str> for CountInput {
    fn from(raw: &str) -> Self {
        CountInput::Text(raw.to_string())
    }
}

/// Parse a JSON Lines edit script
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_script(script: &str) -> Result<Vec<EditOp>> {
    let mut ops = Vec::new();

    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let op = serde_json::from_str(line).map_err(|e| ParseError::Script {
            line: index + 1,
            message: e.to_string(),
        })?;
        ops.push(op);
    }

    Ok(ops)
}
