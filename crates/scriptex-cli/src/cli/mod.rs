//! Command-line interface definition for scriptex.
//!
//! The surface is intentionally small: one positional path plus global flags
//! for logging, configuration and the unterminated-block policy.

pub mod enums;

use clap::Parser;
use std::path::PathBuf;

pub use enums::Unterminated;

/// Scriptex - print the contents of every <script> element in a file
#[derive(Parser, Debug)]
#[command(
    name = "scriptex",
    version,
    about = "Print the contents of every <script> element in a file",
    long_about = "Scans a file for <script ...> ... </script> blocks and prints the text\n\
                  between each pair of tags, followed by a blank line.\n\
                  Blocks are printed in document order. A block whose closing tag is\n\
                  missing stops the scan and is not printed unless --unterminated says otherwise."
)]
pub struct Cli {
    /// File to scan
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every extracted block with its byte offset. Logs go to stderr,
    /// so stdout stays clean for piping.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to a configuration file
    ///
    /// Defaults to scriptex.config.json in the working directory when present.
    /// JSON, TOML and YAML are accepted, chosen by extension.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// What to do with a <script> block that is never closed
    ///
    /// - drop: stop scanning and print nothing for it (default)
    /// - emit: print the rest of the file after the opening tag as a final block
    /// - error: stop scanning and exit with an error
    #[arg(long, value_enum, value_name = "POLICY")]
    pub unterminated: Option<Unterminated>,
}
