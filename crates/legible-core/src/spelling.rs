//! Word-list spell checking.
//!
//! The word list is a plain text file, one word per line. A [`SpellChecker`]
//! reads it once when opened and owns its own copy; two checkers opened on
//! the same file share nothing.

use std::collections::{BTreeMap, HashSet};
use std::fs::{self, OpenOptions};
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{SpellError, SpellResult};

/// File name used when no word list is configured.
pub const DEFAULT_WORD_LIST: &str = "spell";

/// Characters trimmed from both ends of a token before lookup.
const SURROUNDING: &[char] = &[
    '<', '>', '.', ',', ':', ';', '"', '\'', '(', ')', '{', '}', '[', ']', '!', '?',
];

/// A spell checker backed by a word-list file.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    path: Utf8PathBuf,
    words: HashSet<String>,
}

impl SpellChecker {
    /// Load the word list at `path`.
    ///
    /// Each line is trimmed and added as one known word.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::Open`] if the file cannot be read. There is no
    /// fallback list.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref()))]
    pub fn open(path: impl AsRef<Utf8Path>) -> SpellResult<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(path.as_std_path()).map_err(|source| SpellError::Open {
            path: path.clone(),
            source,
        })?;

        let words: HashSet<String> = contents.lines().map(|line| line.trim().to_string()).collect();
        tracing::debug!(words = words.len(), "word list loaded");

        Ok(Self { path, words })
    }

    /// Path of the backing word list.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Number of distinct words loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the loaded list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` was in the list when it was loaded.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Find words in `text` that are not in the list.
    ///
    /// Tokens are split on whitespace and trimmed of surrounding punctuation,
    /// quotes, and brackets. Matching is case-sensitive. Each unknown word
    /// maps to the 1-based token position of its last occurrence.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn check_spelling(&self, text: &str) -> BTreeMap<String, usize> {
        let mut misspelled = BTreeMap::new();

        for (index, token) in text.split_whitespace().enumerate() {
            let word = token.trim_matches(SURROUNDING);
            if !self.words.contains(word) {
                misspelled.insert(word.to_string(), index + 1);
            }
        }

        tracing::debug!(misspelled = misspelled.len(), "spell check complete");
        misspelled
    }

    /// Append `word` to the backing file unless it was already loaded.
    ///
    /// Returns `true` if the word was written. This checker's loaded list is
    /// not updated; open a new checker to see the addition. Concurrent
    /// writers to the same file are not coordinated.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::Append`] if the file cannot be opened for
    /// appending or written.
    #[tracing::instrument(skip(self), fields(path = %self.path))]
    pub fn add_word(&self, word: &str) -> SpellResult<bool> {
        if self.words.contains(word) {
            tracing::debug!("word already known, skipping");
            return Ok(false);
        }

        let append_error = |source: std::io::Error| SpellError::Append {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path.as_std_path())
            .map_err(append_error)?;
        writeln!(file, "{word}").map_err(append_error)?;

        tracing::info!("word added to list");
        Ok(true)
    }
}
