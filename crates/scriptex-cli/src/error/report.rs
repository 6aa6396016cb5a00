//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use scriptex::ExtractorError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Extract(ExtractorError::UnclosedScriptTag { position }) => miette::miette!(
            help = "Close the block with </script>, or pass --unterminated drop to skip it",
            "Unclosed <script> tag starting at byte {}",
            position
        ),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path and try again",
            "File not found: {}",
            path.display()
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}
