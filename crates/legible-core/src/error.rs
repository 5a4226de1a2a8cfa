//! Error types for legible-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised at the boundary where callers hand text to the engine.
///
/// The engine itself never fails: empty or degenerate text scores zero.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input exceeds the configured byte limit.
    #[error("Too many bytes: {size}. Current limit is {limit}.")]
    InputTooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// The limit that was exceeded.
        limit: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors from the word-list spell checker.
#[derive(Error, Debug)]
pub enum SpellError {
    /// The backing word list could not be opened or read.
    #[error("failed to open word list {path}: {source}")]
    Open {
        /// Path of the word list.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A word could not be appended to the backing word list.
    #[error("failed to append to word list {path}: {source}")]
    Append {
        /// Path of the word list.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`SpellError`].
pub type SpellResult<T> = Result<T, SpellError>;
