//! Analyzer configuration.

use crate::error::{LitriskError, Result};

/// Default number of characters of context on each side of a match.
pub const DEFAULT_CONTEXT_CHARS: usize = 40;

/// Default maximum snippet length in characters, before the ellipsis.
pub const DEFAULT_MAX_SNIPPET_CHARS: usize = 200;

/// Default marker appended to truncated snippets.
pub const DEFAULT_ELLIPSIS: &str = "…";

/// Configuration for snippet extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Characters of context taken before the match start and after its end.
    pub context_chars: usize,
    /// Maximum snippet length in characters after trimming.
    pub max_snippet_chars: usize,
    /// Marker appended when a snippet is truncated.
    pub ellipsis: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            context_chars: DEFAULT_CONTEXT_CHARS,
            max_snippet_chars: DEFAULT_MAX_SNIPPET_CHARS,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Create a new analyzer configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the context width.
    pub fn context_chars(mut self, context_chars: usize) -> Self {
        self.context_chars = context_chars;
        self
    }

    /// Set the maximum snippet length.
    pub fn max_snippet_chars(mut self, max_snippet_chars: usize) -> Self {
        self.max_snippet_chars = max_snippet_chars;
        self
    }

    /// Set the truncation marker.
    pub fn ellipsis<S: Into<String>>(mut self, ellipsis: S) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_snippet_chars == 0 {
            return Err(LitriskError::config(
                "max_snippet_chars must be greater than 0",
            ));
        }
        Ok(())
    }
}
