//! Core library for legible.
//!
//! Turns raw text into word, sentence, and syllable counts and from those
//! into Flesch Reading Ease and Flesch-Kincaid Grade Level scores. Also
//! provides a word-list spell checker that is independent of scoring.
//!
//! # Modules
//!
//! - [`words`] - Whitespace word counting
//! - [`syllables`] - Vowel-run syllable estimation with an outlier table
//! - [`sentences`] - Terminal-punctuation sentence splitting
//! - [`readability`] - Aggregate statistics and both Flesch formulas
//! - [`spelling`] - Word-list spell checker
//! - [`markdown`] - Markdown to prose reduction
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use legible_core::readability;
//!
//! let report = readability::analyze("The cat sat on the mat. The dog ran fast.");
//! assert_eq!(report.total_words, 10);
//! assert_eq!(report.total_sentences, 2);
//! println!("grade {:.2}, ease {:.2}", report.grade_level, report.reading_ease);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod limits;
pub mod markdown;
pub mod readability;
pub mod sentences;
pub mod spelling;
pub mod syllables;
pub mod words;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, SpellError, SpellResult,
};
pub use limits::{DEFAULT_MAX_INPUT_BYTES, check_input_size};
pub use readability::ReadabilityReport;
pub use spelling::SpellChecker;
