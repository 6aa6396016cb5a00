//! Extract command implementation.
//!
//! Reads the whole input file, scans it for `<script>` blocks, and writes each
//! block's contents to stdout followed by a blank line.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use scriptex::{ExtractorError, HtmlExtractor, UnterminatedPolicy};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::ScriptexConfig;
use crate::error::{Result, ResultExt};

/// Execute the extract command.
///
/// Output is buffered and flushed once; a closed pipe on the reading side
/// ends the command quietly.
pub fn execute(args: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = ScriptexConfig::load(args, &cwd)?;
    debug!(policy = %config.unterminated, "configuration loaded");

    let source = read_source(&args.path)?;
    info!(path = %args.path.display(), bytes = source.len(), "scanning");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let written = write_scripts(&source, config.unterminated, &mut out).and_then(|count| {
        out.flush()?;
        Ok(count)
    });

    match written {
        Ok(count) => {
            info!(count, "done");
            Ok(())
        }
        Err(crate::CliError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Read the whole file at `path` into memory.
///
/// The bytes are kept as read. No encoding is assumed, so non-UTF-8 input is
/// scanned and written back unchanged.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_path(path)
}

/// Write every script segment of `source` to `out`, each followed by a blank
/// line, and return how many were written.
///
/// Segments are written as they are found. Under [`UnterminatedPolicy::Error`]
/// the segments before the dangling tag are written before the error is
/// returned.
pub fn write_scripts<W: Write>(
    source: &[u8],
    policy: UnterminatedPolicy,
    out: &mut W,
) -> Result<usize> {
    let mut scripts = HtmlExtractor::new(policy).script_bytes(source);
    let mut count = 0;

    for script in scripts.by_ref() {
        out.write_all(script.source_bytes)?;
        out.write_all(b"\n\n")?;
        count += 1;
    }

    if let Some(position) = scripts.unterminated() {
        if policy == UnterminatedPolicy::Error {
            return Err(ExtractorError::UnclosedScriptTag { position }.into());
        }
        debug!(position, %policy, "stopped at unterminated script tag");
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use tempfile::NamedTempFile;

    fn render(source: &str, policy: UnterminatedPolicy) -> (Result<usize>, String) {
        let mut buf = Vec::new();
        let result = write_scripts(source.as_bytes(), policy, &mut buf);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_no_scripts_writes_nothing() {
        let (result, output) = render("<p>plain</p>", UnterminatedPolicy::Drop);
        assert_eq!(result.unwrap(), 0);
        assert_eq!(output, "");
    }

    #[test]
    fn test_segments_separated_by_blank_lines() {
        let (result, output) = render(
            "<script>A</script><script type=\"x\">B</script>",
            UnterminatedPolicy::Drop,
        );
        assert_eq!(result.unwrap(), 2);
        assert_eq!(output, "A\n\nB\n\n");
    }

    #[test]
    fn test_multiline_segment_written_verbatim() {
        let (_, output) = render("<script>\nx();\n</script>", UnterminatedPolicy::Drop);
        assert_eq!(output, "\nx();\n\n\n");
    }

    #[test]
    fn test_drop_policy_skips_dangling_block() {
        let (result, output) = render("<script>A</script><script>B", UnterminatedPolicy::Drop);
        assert_eq!(result.unwrap(), 1);
        assert_eq!(output, "A\n\n");
    }

    #[test]
    fn test_emit_policy_writes_dangling_block() {
        let (result, output) = render("<script>A</script><script>B", UnterminatedPolicy::Emit);
        assert_eq!(result.unwrap(), 2);
        assert_eq!(output, "A\n\nB\n\n");
    }

    #[test]
    fn test_error_policy_writes_prefix_then_fails() {
        let (result, output) = render("<script>A</script><script>B", UnterminatedPolicy::Error);
        assert!(matches!(
            result,
            Err(CliError::Extract(ExtractorError::UnclosedScriptTag { position: 18 }))
        ));
        assert_eq!(output, "A\n\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/definitely/not/here.html")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_read_source_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("<script>é</script>".as_bytes()).unwrap();
        assert_eq!(read_source(file.path()).unwrap(), "<script>é</script>".as_bytes());
    }

    #[test]
    fn test_non_utf8_bytes_come_through_unchanged() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<p>\xff</p><script>var s='caf\xe9';</script>").unwrap();

        let source = read_source(file.path()).unwrap();
        let mut buf = Vec::new();
        assert_eq!(write_scripts(&source, UnterminatedPolicy::Drop, &mut buf).unwrap(), 1);
        assert_eq!(buf, b"var s='caf\xe9';\n\n");
    }
}
