//! Opening and closing `<script>` tag matching.
//!
//! Patterns run over raw bytes with Unicode mode off, so `[^>]` matches any
//! byte but `>` and input in any ASCII-compatible encoding is scanned as is.
//! Every tag boundary is an ASCII byte, so offsets found in a `&str` are
//! always char boundaries.

use regex::bytes::Regex;
use std::sync::LazyLock;

/// `<script` followed by a space and any non-`>` run, or a bare `<script>`.
static OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)<script [^>]*>|<script>").expect("valid opening tag pattern")
});

static CLOSING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)</script [^>]*>|</script>").expect("valid closing tag pattern")
});

/// Byte range of a tag within the searched text.
///
/// `start` is the position of `<`, `end` is one past the closing `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch {
    pub start: usize,
    pub end: usize,
}

impl TagMatch {
    /// Shift both bounds by `base`, turning a match in a suffix into an
    /// absolute position in the full buffer.
    pub fn offset(self, base: usize) -> Self {
        Self {
            start: self.start + base,
            end: self.end + base,
        }
    }
}

impl From<regex::bytes::Match<'_>> for TagMatch {
    fn from(m: regex::bytes::Match<'_>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
        }
    }
}

/// Finds the first opening `<script>` tag in `text`.
pub fn find_opening_tag(text: &str) -> Option<TagMatch> {
    find_opening_tag_bytes(text.as_bytes())
}

/// Finds the first closing `</script>` tag in `text`.
pub fn find_closing_tag(text: &str) -> Option<TagMatch> {
    find_closing_tag_bytes(text.as_bytes())
}

/// Byte-slice form of [`find_opening_tag`].
pub fn find_opening_tag_bytes(bytes: &[u8]) -> Option<TagMatch> {
    OPENING_TAG.find(bytes).map(TagMatch::from)
}

/// Byte-slice form of [`find_closing_tag`].
pub fn find_closing_tag_bytes(bytes: &[u8]) -> Option<TagMatch> {
    CLOSING_TAG.find(bytes).map(TagMatch::from)
}
