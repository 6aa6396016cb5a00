//! Script extractors.
//!
//! This module provides extraction of `<script>` element contents from HTML
//! text, either lazily through [`scripts`] or collected through the
//! [`Extractor`] trait.
//!
//! # Usage
//!
//! ```rust
//! use scriptex::extractors::scripts;
//!
//! let html = r#"<script>let a = 1;</script><script type="module">run()</script>"#;
//! let bodies: Vec<_> = scripts(html).map(|s| s.source_text).collect();
//! assert_eq!(bodies, vec!["let a = 1;", "run()"]);
//! ```

mod common;
mod html;
mod tags;

pub use common::{ExtractedBytes, ExtractedScript, Extractor, ExtractorError, UnterminatedPolicy};
pub use html::{HtmlExtractor, ScriptBytes, Scripts, script_bytes, scripts};
pub use tags::{
    TagMatch, find_closing_tag, find_closing_tag_bytes, find_opening_tag, find_opening_tag_bytes,
};

/// Collect every script segment of `content` with the default policy.
///
/// Unterminated trailing blocks are dropped, so this never fails.
///
/// # Example
///
/// ```rust
/// use scriptex::extractors::extract_scripts;
///
/// let scripts = extract_scripts("<script>A</script><script>B");
/// assert_eq!(scripts.len(), 1);
/// assert_eq!(scripts[0].source_text, "A");
/// ```
pub fn extract_scripts(content: &str) -> Vec<ExtractedScript<'_>> {
    scripts(content).collect()
}
