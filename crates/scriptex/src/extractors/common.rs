//! Common types and traits for script extractors.
//!
//! This module defines the unified interface for pulling `<script>` element
//! contents out of HTML-like text.

use serde::{Deserialize, Serialize};

/// Script content extracted from an HTML document.
///
/// Borrows from the input buffer; nothing is copied during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedScript<'a> {
    /// Text strictly between the opening and closing tags
    pub source_text: &'a str,

    /// Byte offset from the start of the original input
    ///
    /// This offset points to the first byte after the opening tag's `>`.
    pub source_offset: usize,

    /// Raw attribute text of the opening tag (between `<script` and `>`)
    ///
    /// Empty for a bare `<script>`. Includes the separating space otherwise.
    pub attributes: &'a str,

    /// Whether a closing tag ended this segment
    ///
    /// Only `false` for the trailing segment produced by
    /// [`UnterminatedPolicy::Emit`].
    pub terminated: bool,
}

impl<'a> ExtractedScript<'a> {
    /// Creates a segment that was closed by a `</script>` tag.
    pub fn new(source_text: &'a str, source_offset: usize, attributes: &'a str) -> Self {
        Self {
            source_text,
            source_offset,
            attributes,
            terminated: true,
        }
    }

    /// Creates a trailing segment whose opening tag was never closed.
    pub fn unterminated(source_text: &'a str, source_offset: usize, attributes: &'a str) -> Self {
        Self {
            source_text,
            source_offset,
            attributes,
            terminated: false,
        }
    }

    /// Byte range of the content within the original input.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.source_offset..self.source_offset + self.source_text.len()
    }
}

/// Script content extracted from a raw byte buffer.
///
/// Byte counterpart of [`ExtractedScript`] for input whose encoding is
/// unknown or not UTF-8. The bytes are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBytes<'a> {
    /// Bytes strictly between the opening and closing tags
    pub source_bytes: &'a [u8],

    /// Byte offset of the content from the start of the original input
    pub source_offset: usize,

    /// Raw attribute bytes of the opening tag (between `<script` and `>`)
    pub attributes: &'a [u8],

    /// Whether a closing tag ended this segment
    pub terminated: bool,
}

impl ExtractedBytes<'_> {
    /// Byte range of the content within the original input.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.source_offset..self.source_offset + self.source_bytes.len()
    }
}

/// What to do with an opening tag that has no closing tag after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedPolicy {
    /// Stop scanning and drop the dangling block
    #[default]
    Drop,
    /// Yield everything after the dangling opening tag as a final segment
    Emit,
    /// Stop scanning and report [`ExtractorError::UnclosedScriptTag`]
    Error,
}

impl std::fmt::Display for UnterminatedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Drop => "drop",
            Self::Emit => "emit",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Unified error type for all extractors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    /// Script tag opened but never closed
    #[error("Unclosed script tag starting at byte position {position}")]
    UnclosedScriptTag {
        /// Byte position where the unclosed tag begins
        position: usize,
    },
}

/// Trait for script extractors.
pub trait Extractor {
    /// Extract every script segment from the given source text, in document order.
    ///
    /// # Arguments
    ///
    /// * `source` - The complete file content
    fn extract<'a>(&self, source: &'a str) -> Result<Vec<ExtractedScript<'a>>, ExtractorError>;
}
