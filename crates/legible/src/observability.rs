//! Logging setup.
//!
//! Human-readable logs go to stderr, filtered by `-q`/`-v` or `RUST_LOG`.
//! When a log file or directory is configured, JSONL logs are also written
//! there at the configured log level through a non-blocking writer.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Explicit log file path.
const LOG_PATH_ENV: &str = "LEGIBLE_LOG_PATH";

/// Log directory (file name defaults to [`DEFAULT_LOG_FILE`]).
const LOG_DIR_ENV: &str = "LEGIBLE_LOG_DIR";

/// File name used inside a log directory.
const DEFAULT_LOG_FILE: &str = "legible.jsonl";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for the default log file.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `LEGIBLE_LOG_PATH` and `LEGIBLE_LOG_DIR`; a configured `log_dir`
    /// replaces the environment directory.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir: log_dir.or_else(|| std::env::var_os(LOG_DIR_ENV).map(PathBuf::from)),
        }
    }

    /// Directory and file name for the JSONL log, or `None` for console only.
    pub fn log_file(&self) -> Option<(PathBuf, OsString)> {
        if let Some(ref path) = self.log_path {
            let name = path.file_name()?.to_os_string();
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), OsString::from(DEFAULT_LOG_FILE)))
    }
}

/// Console filter: `RUST_LOG` if set, else warn (`-q`: error, `-v`: debug, `-vv`: trace).
pub fn console_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit so buffered file logs are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    console: EnvFilter,
    file_level: &str,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_only_by_default() {
        assert!(ObservabilityConfig::default().log_file().is_none());
    }

    #[test]
    fn log_dir_uses_default_file_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/var/log/legible")),
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/legible"));
        assert_eq!(name, "legible.jsonl");
    }

    #[test]
    fn log_path_wins_over_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/tmp/custom/run.log")),
            log_dir: Some(PathBuf::from("/var/log/legible")),
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/custom"));
        assert_eq!(name, "run.log");
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("run.log")),
            log_dir: None,
        };
        let (dir, _) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("."));
    }
}
