//! Word counting.
//!
//! A word is any maximal run of non-whitespace characters. Nothing is
//! normalized: `don't.` and `http://example.com/etc` are one word each.

/// Count the words in `text`.
///
/// Leading, trailing, and repeated whitespace (spaces, tabs, newlines) is
/// ignored. Empty and all-whitespace input yields 0.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
