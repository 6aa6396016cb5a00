//! Scriptex CLI - print the contents of every `<script>` element in a file.
//!
//! This crate wraps the `scriptex` extractor with a command-line surface:
//! one positional path, a handful of ambient flags, and segments written to
//! standard output each followed by a blank line.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered configuration (defaults, file, environment, flags)
//! - [`commands`] - The extract command
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - `tracing` subscriber setup

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;

pub use error::{CliError, ConfigError, Result, ResultExt};
