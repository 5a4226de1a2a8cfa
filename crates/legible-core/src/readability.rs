//! Readability scoring.
//!
//! Flesch Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Flesch-Kincaid Grade Level: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Higher ease = more readable. Lower grade = more readable. Neither score is
//! clamped, so pathological input can go negative or past 100.
//!
//! Every call derives a fresh [`ReadabilityReport`]; nothing is cached between
//! calls.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::markdown;
use crate::sentences::count_sentences;
use crate::syllables::count_syllables;
use crate::words::count_words;

/// Aggregate statistics and both Flesch scores for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch-Kincaid Grade Level.
    pub grade_level: f64,
    /// Flesch Reading Ease.
    pub reading_ease: f64,
    /// Number of whitespace-separated words.
    pub total_words: usize,
    /// Number of sentences.
    pub total_sentences: usize,
    /// Estimated syllables across all words.
    pub total_syllables: usize,
    /// Average words per sentence (0 when there are no sentences or words).
    pub words_per_sentence: f64,
    /// Average syllables per word (0 when there are no sentences or words).
    pub syllables_per_word: f64,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Whether the grade exceeds the maximum.
    pub over_max: bool,
}

/// Compute word, sentence, and syllable totals and both scores.
///
/// Trailing whitespace is trimmed first. Text with no words or no sentences
/// scores 0 on both scales with zero ratios; that is not an error.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> ReadabilityReport {
    let text = text.trim_end();

    let total_words = count_words(text);
    let total_sentences = count_sentences(text);
    let total_syllables = count_syllables(text);

    let mut report = ReadabilityReport {
        grade_level: 0.0,
        reading_ease: 0.0,
        total_words,
        total_sentences,
        total_syllables,
        words_per_sentence: 0.0,
        syllables_per_word: 0.0,
        max_grade: None,
        over_max: false,
    };

    if total_words == 0 || total_sentences == 0 {
        tracing::debug!("no scorable text, returning zero scores");
        return report;
    }

    let words_per_sentence = total_words as f64 / total_sentences as f64;
    let syllables_per_word = total_syllables as f64 / total_words as f64;

    report.words_per_sentence = words_per_sentence;
    report.syllables_per_word = syllables_per_word;
    report.reading_ease =
        (-84.6f64).mul_add(syllables_per_word, (-1.015f64).mul_add(words_per_sentence, 206.835));
    report.grade_level = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;

    report
}

/// Flesch Reading Ease of `text`. Zero for empty or unscorable text.
pub fn flesch_reading_ease(text: &str) -> f64 {
    analyze(text).reading_ease
}

/// Flesch-Kincaid Grade Level of `text`. Zero for empty or unscorable text.
pub fn flesch_kincaid_grade_level(text: &str) -> f64 {
    analyze(text).grade_level
}

/// Score text and gate it against an optional maximum grade.
///
/// # Arguments
///
/// * `text`: The text to analyze.
/// * `strip_md`: If `true`, strip markdown formatting before analysis.
/// * `max_grade`: Optional maximum acceptable grade level.
#[tracing::instrument(skip(text), fields(text_len = text.len(), strip_md))]
pub fn check_readability(text: &str, strip_md: bool, max_grade: Option<f64>) -> ReadabilityReport {
    let mut report = if strip_md {
        analyze(&markdown::strip_to_prose(text))
    } else {
        analyze(text)
    };

    report.max_grade = max_grade;
    report.over_max = max_grade.is_some_and(|max| report.grade_level > max);
    report
}
