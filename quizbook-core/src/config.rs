//! Editor configuration

/// Text used for both question and answer of chapters created by a resize
pub const DEFAULT_PLACEHOLDER: &str = "Example";

/// Upper bound on the declared chapter count
pub const DEFAULT_MAX_CHAPTERS: usize = 500;

/// Settings for an editing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Largest chapter count a session will resize to
    pub max_chapters: usize,

    /// Placeholder text for new chapters
    pub placeholder: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_chapters: DEFAULT_MAX_CHAPTERS,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl EditorConfig {
    /// Set the chapter limit
    pub fn with_max_chapters(mut self, max_chapters: usize) -> Self {
        self.max_chapters = max_chapters;
        self
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Turn raw chapter-count input into a usable count
    ///
    /// Empty, negative, NaN and non-numeric input all become 0. Fractions
    /// are truncated and anything above `max_chapters` (including infinity)
    /// is clamped to it.
    pub fn normalize_chapter_count(&self, raw: &str) -> usize {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return 0;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value > 0.0 => {
                if value.is_finite() {
                    (value.trunc() as usize).min(self.max_chapters)
                } else {
                    self.max_chapters
                }
            }
            _ => 0,
        }
    }
}
