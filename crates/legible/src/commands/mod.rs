//! Command implementations.

use std::fmt::Display;
use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::{OwoColorize, Stream, Style};

use legible_core::check_input_size;

pub mod info;
pub mod readability;
pub mod sentences;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod spell;
pub mod syllables;
pub mod words;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Render `text` with `style` if stdout takes color under the `--color` choice.
pub fn styled(text: impl Display, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style))
        .to_string()
}

/// Read a file (or stdin for `-`) and validate its size against the configured limit.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read standard input")?;
        check_input_size(content.len(), max_bytes).context("input rejected: <stdin>")?;
        return Ok(content);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    check_input_size(size, max_bytes).with_context(|| format!("input rejected: {path}"))?;

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_input(contents: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("input.txt")).unwrap();
        std::fs::write(&path, contents).unwrap();
        (tmp, path)
    }

    #[test]
    fn reads_file_within_limit() {
        let (_tmp, path) = temp_input("The cat sat.");
        assert_eq!(read_input(&path, Some(100)).unwrap(), "The cat sat.");
    }

    #[test]
    fn rejects_oversized_file() {
        let (_tmp, path) = temp_input(&"a ".repeat(20));
        let err = read_input(&path, Some(10)).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("input rejected"));
        assert!(chain.contains("Too many bytes: 40. Current limit is 10."));
    }

    #[test]
    fn no_limit_reads_anything() {
        let (_tmp, path) = temp_input(&"a ".repeat(20));
        assert!(read_input(&path, None).is_ok());
    }

    #[test]
    fn styled_is_plain_when_color_is_off() {
        owo_colors::set_override(false);
        assert_eq!(styled("PASS:", Style::new().green()), "PASS:");
        assert_eq!(styled(format!("{:>3}", 1), Style::new().dimmed()), "  1");
        owo_colors::unset_override();
    }

    #[test]
    fn missing_file_errors() {
        let err = read_input(Utf8Path::new("/definitely/not/here.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
