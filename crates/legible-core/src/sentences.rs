//! Sentence segmentation.
//!
//! A sentence ends at `.`, `!`, `:`, or `?` followed by one whitespace
//! character. The punctuation and the whitespace are consumed. Quote marks are
//! removed first so that `?" It` still splits.
//!
//! This is a heuristic: `Dr. Smith`, `wait... what`, and `costs 3. Then`
//! all split where a reader would not.

use regex::Regex;
use std::sync::LazyLock;

/// Quote characters that can sit between terminal punctuation and a space.
static QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[”'"]"#).expect("valid regex"));

/// Terminal punctuation plus the single whitespace character after it.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!:?]\s").expect("valid regex"));

/// Split `text` into sentences.
///
/// The terminal punctuation is not kept. A final fragment with no terminator
/// is kept as the last sentence. Empty input yields no sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_into_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let unquoted = QUOTES.replace_all(text, "");
    SENTENCE_BREAK
        .split(&unquoted)
        .map(str::to_string)
        .collect()
}

/// Count the sentences in `text`. Zero for empty input.
pub fn count_sentences(text: &str) -> usize {
    split_into_sentences(text).len()
}
