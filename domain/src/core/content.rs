//! Content value object

use serde::{Deserialize, Serialize};

/// The content under critique (Value Object)
///
/// Represents the input text that the council decomposes, critiques,
/// arbitrates, and synthesizes a report about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    text: String,
}

impl Content {
    /// Create new content
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.trim().is_empty(), "Content cannot be empty");
        Self { text }
    }

    /// Try to create new content, returning None if invalid
    pub fn try_new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// Get the content text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::new(s)
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::new(s)
    }
}
