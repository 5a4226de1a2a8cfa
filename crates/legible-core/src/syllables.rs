//! Syllable estimation.
//!
//! One syllable per run of adjacent vowels (`a e i o u y`), so diphthongs
//! count once. A leading `y` is a consonant. Words ending in a silent `e`
//! after a vowel-consonant pair (`-ale`, `-ige`, ...) or in a long `-ue` start
//! the count at -1 to cancel the trailing run. Words the rules get wrong are
//! looked up in [`dictionaries::outliers`](crate::dictionaries::outliers).

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::dictionaries::outliers;

/// A word followed by a single trailing punctuation mark.
static TRAILING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)[.?:;,!]$").expect("valid regex"));

/// Syllable estimate for one word of a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordSyllables {
    /// The word as it appeared in the text.
    pub word: String,
    /// Estimated syllable count.
    pub syllables: usize,
}

/// Scanner position relative to vowel runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Consonants,
    Vowels,
}

/// Sum the syllable estimates of every whitespace-separated word in `text`.
pub fn count_syllables(text: &str) -> usize {
    text.split_whitespace().map(count_syllables_in_word).sum()
}

/// Per-word syllable estimates, in text order.
pub fn breakdown(text: &str) -> Vec<WordSyllables> {
    text.split_whitespace()
        .map(|word| WordSyllables {
            word: word.to_string(),
            syllables: count_syllables_in_word(word),
        })
        .collect()
}

/// Estimate the syllables in a single word.
///
/// Never negative, but not floored at 1 either: `"hmm"`, `"yrs"`, and
/// `"eye"` all come out as 0.
pub fn count_syllables_in_word(word: &str) -> usize {
    let lower = strip_trailing_punctuation(word).to_lowercase();

    if let Some(count) = outliers::lookup(&lower) {
        return count;
    }

    let chars: Vec<char> = lower.chars().collect();
    let mut count = silent_ending_bias(&chars);

    let start = usize::from(chars.first() == Some(&'y'));
    let mut state = Scan::Consonants;
    for &ch in &chars[start..] {
        match (state, is_vowel(ch)) {
            (Scan::Consonants, true) => {
                count += 1;
                state = Scan::Vowels;
            }
            (Scan::Vowels, false) => state = Scan::Consonants,
            _ => {}
        }
    }

    usize::try_from(count).unwrap_or(0)
}

/// Drop one of `. ? : ; , !` when it ends an otherwise word-character token.
fn strip_trailing_punctuation(word: &str) -> &str {
    TRAILING_PUNCTUATION
        .captures(word)
        .and_then(|caps| caps.get(1))
        .map_or(word, |m| m.as_str())
}

/// Starting value for the accumulator: -1 for a silent final vowel run.
///
/// The two endings do not stack.
fn silent_ending_bias(chars: &[char]) -> isize {
    let len = chars.len();
    let long_ue = len >= 6 && chars.ends_with(&['u', 'e']);
    let silent_e = len >= 3 && chars[len - 1] == 'e' && is_vowel(chars[len - 3]);

    if long_ue || silent_e { -1 } else { 0 }
}

const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
