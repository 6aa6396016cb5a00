//! Scriptex core - extraction of `<script>` element contents from HTML text.
//!
//! The crate does no I/O. Callers hand it a fully loaded buffer and get back
//! borrowed segments in document order.
//!
//! This is deliberately not an HTML parser: tags are found by pattern, quoted
//! `>` inside attributes, comments and CDATA are not understood, and the first
//! closing tag after an opening tag always ends the segment.

pub mod extractors;

pub use extractors::{
    ExtractedBytes, ExtractedScript, Extractor, ExtractorError, HtmlExtractor, ScriptBytes,
    Scripts, UnterminatedPolicy, extract_scripts, script_bytes, scripts,
};
