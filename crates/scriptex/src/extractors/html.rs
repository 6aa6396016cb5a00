//! HTML `<script>` content extractor.
//!
//! Scans the input once, left to right. Each step finds the next opening tag,
//! then the first closing tag after it, and yields the text in between. Nested
//! opening tags are not tracked: the first `</script>` always ends the segment.
//!
//! The scan itself runs over bytes. [`Scripts`] hands out `&str` slices of a
//! text buffer and [`ScriptBytes`] hands out `&[u8]` slices of a raw buffer.

use std::iter::FusedIterator;
use std::ops::Range;

use tracing::debug;

use super::common::{
    ExtractedBytes, ExtractedScript, Extractor, ExtractorError, UnterminatedPolicy,
};
use super::tags::{find_closing_tag_bytes, find_opening_tag_bytes};

const OPENING_PREFIX_LEN: usize = "<script".len();

/// Shortest possible segment: `"<script></script>".len()`
const MIN_SEGMENT_LEN: usize = "<script></script>".len();

/// HTML script extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor {
    policy: UnterminatedPolicy,
}

impl HtmlExtractor {
    /// Creates an extractor with the given unterminated-block policy.
    pub fn new(policy: UnterminatedPolicy) -> Self {
        Self { policy }
    }

    /// The policy applied to an opening tag that is never closed.
    pub fn policy(&self) -> UnterminatedPolicy {
        self.policy
    }

    /// Lazily iterate over the script segments of `source`.
    pub fn scripts<'a>(&self, source: &'a str) -> Scripts<'a> {
        Scripts::new(source, self.policy)
    }

    /// Lazily iterate over the script segments of a raw byte buffer.
    ///
    /// Bytes outside the tags are never decoded, so non-UTF-8 content comes
    /// back exactly as it was read.
    pub fn script_bytes<'a>(&self, source: &'a [u8]) -> ScriptBytes<'a> {
        ScriptBytes::new(source, self.policy)
    }
}

impl Extractor for HtmlExtractor {
    fn extract<'a>(&self, source: &'a str) -> Result<Vec<ExtractedScript<'a>>, ExtractorError> {
        let mut scripts = self.scripts(source);
        let sources: Vec<_> = scripts.by_ref().collect();

        if self.policy == UnterminatedPolicy::Error {
            if let Some(position) = scripts.unterminated() {
                return Err(ExtractorError::UnclosedScriptTag { position });
            }
        }

        Ok(sources)
    }
}

/// Positions of one segment within the scanned buffer.
#[derive(Debug)]
struct Segment {
    content: Range<usize>,
    attributes: Range<usize>,
    terminated: bool,
}

/// Cursor state shared by [`Scripts`] and [`ScriptBytes`].
#[derive(Debug)]
struct Scanner<'a> {
    source: &'a [u8],
    cursor: usize,
    policy: UnterminatedPolicy,
    unterminated: Option<usize>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a [u8], policy: UnterminatedPolicy) -> Self {
        Self {
            source,
            cursor: 0,
            policy,
            unterminated: None,
            finished: false,
        }
    }

    fn remaining(&self) -> Range<usize> {
        self.cursor..self.source.len()
    }

    fn finish(&mut self) {
        self.finished = true;
        self.cursor = self.source.len();
    }

    fn next_segment(&mut self) -> Option<Segment> {
        if self.finished {
            return None;
        }

        let Some(open) =
            find_opening_tag_bytes(&self.source[self.cursor..]).map(|m| m.offset(self.cursor))
        else {
            self.finish();
            return None;
        };

        // Everything between "<script" and the tag's closing '>'
        let attributes = open.start + OPENING_PREFIX_LEN..open.end - 1;
        let content_start = open.end;

        let Some(close) =
            find_closing_tag_bytes(&self.source[content_start..]).map(|m| m.offset(content_start))
        else {
            debug!(position = open.start, policy = %self.policy, "script tag is never closed");
            self.unterminated = Some(open.start);
            self.finish();

            return match self.policy {
                UnterminatedPolicy::Emit => Some(Segment {
                    content: content_start..self.source.len(),
                    attributes,
                    terminated: false,
                }),
                UnterminatedPolicy::Drop | UnterminatedPolicy::Error => None,
            };
        };

        self.cursor = close.end;
        debug!(offset = content_start, len = close.start - content_start, "extracted script");

        Some(Segment {
            content: content_start..close.start,
            attributes,
            terminated: true,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.remaining().len() / MIN_SEGMENT_LEN + 1))
        }
    }
}

/// Lazy, single-pass iterator over the script segments of a text buffer.
///
/// Created by [`scripts`] or [`HtmlExtractor::scripts`]. The only state is a
/// cursor into the borrowed buffer; once exhausted it stays exhausted.
#[derive(Debug)]
pub struct Scripts<'a> {
    source: &'a str,
    scanner: Scanner<'a>,
}

impl<'a> Scripts<'a> {
    fn new(source: &'a str, policy: UnterminatedPolicy) -> Self {
        Self {
            source,
            scanner: Scanner::new(source.as_bytes(), policy),
        }
    }

    /// The part of the buffer that has not been scanned yet.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.scanner.remaining()]
    }

    /// Start of the opening tag that stopped the scan for lack of a closing tag.
    ///
    /// `None` while the iterator is still running, or when it ended because no
    /// further opening tag exists.
    pub fn unterminated(&self) -> Option<usize> {
        self.scanner.unterminated
    }
}

impl<'a> Iterator for Scripts<'a> {
    type Item = ExtractedScript<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Tag boundaries are ASCII bytes, so every range is on a char boundary
        let segment = self.scanner.next_segment()?;
        let source_text = &self.source[segment.content.clone()];
        let attributes = &self.source[segment.attributes];

        Some(if segment.terminated {
            ExtractedScript::new(source_text, segment.content.start, attributes)
        } else {
            ExtractedScript::unterminated(source_text, segment.content.start, attributes)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scanner.size_hint()
    }
}

impl FusedIterator for Scripts<'_> {}

/// Lazy, single-pass iterator over the script segments of a byte buffer.
///
/// Created by [`script_bytes`] or [`HtmlExtractor::script_bytes`].
#[derive(Debug)]
pub struct ScriptBytes<'a> {
    source: &'a [u8],
    scanner: Scanner<'a>,
}

impl<'a> ScriptBytes<'a> {
    fn new(source: &'a [u8], policy: UnterminatedPolicy) -> Self {
        Self {
            source,
            scanner: Scanner::new(source, policy),
        }
    }

    /// The part of the buffer that has not been scanned yet.
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.scanner.remaining()]
    }

    /// Start of the opening tag that stopped the scan for lack of a closing tag.
    pub fn unterminated(&self) -> Option<usize> {
        self.scanner.unterminated
    }
}

impl<'a> Iterator for ScriptBytes<'a> {
    type Item = ExtractedBytes<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.scanner.next_segment()?;

        Some(ExtractedBytes {
            source_bytes: &self.source[segment.content.clone()],
            source_offset: segment.content.start,
            attributes: &self.source[segment.attributes],
            terminated: segment.terminated,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scanner.size_hint()
    }
}

impl FusedIterator for ScriptBytes<'_> {}

/// Lazily iterate over the script segments of `source` with the default
/// (drop) policy for unterminated blocks.
pub fn scripts(source: &str) -> Scripts<'_> {
    Scripts::new(source, UnterminatedPolicy::Drop)
}

/// Byte-buffer form of [`scripts`].
pub fn script_bytes(source: &[u8]) -> ScriptBytes<'_> {
    ScriptBytes::new(source, UnterminatedPolicy::Drop)
}
