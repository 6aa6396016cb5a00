//! Scriptex CLI - print the contents of every `<script>` element in a file.
//!
//! This is the main entry point. It handles argument parsing, logging
//! initialization, and hands off to the extract command.

use clap::Parser;
use miette::Result;
use scriptex_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);

    commands::extract_execute(&args).map_err(error::cli_error_to_miette)
}
