//! Logging infrastructure for the scriptex CLI.
//!
//! Logs are written to stderr through a `tracing` subscriber so that stdout
//! only ever carries extracted script text.
//!
//! # Example
//!
//! ```rust,no_run
//! use scriptex_cli::logger::init_logger;
//! use tracing::debug;
//!
//! init_logger(true, false, false);
//! debug!(path = "index.html", "scanning");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used by `--verbose`.
pub const VERBOSE_FILTER: &str = "scriptex=debug,scriptex_cli=debug";

/// Filter used by `--quiet`.
pub const QUIET_FILTER: &str = "scriptex=error,scriptex_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "scriptex=warn,scriptex_cli=warn";

/// Pick the filter for the given flags.
///
/// Order: `--verbose`, then `--quiet`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// # Environment Variables
///
/// - `NO_COLOR`: If set, disables colors
/// - `FORCE_COLOR`: If set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    // Logs go to stderr, so that's the stream whose capabilities matter
    console::Term::stderr().features().colors_supported()
}
