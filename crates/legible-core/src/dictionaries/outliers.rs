//! Outlier words whose syllable counts the vowel-run scanner gets wrong.
//!
//! Lookups here win over the scanner. Keys are lower-case.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Words with a fixed syllable count, bypassing the scanner.
pub static OUTLIERS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Silent trailing "ue" that the -ue bias does not catch (too short)
    map.extend([("toque", 1), ("rogue", 1), ("vogue", 1)]);

    map.extend([
        ("marque", 2),
        ("subdue", 2),
        ("cafe", 2),
        ("ok", 2),
        ("shuddered", 2),
        ("murdered", 2),
    ]);

    map.extend([("finale", 3), ("avenue", 3)]);

    map.extend([("reality", 4), ("minutiae", 4)]);

    map
});

/// Look up the syllable count of an outlier word.
///
/// `word` must already be lower-cased.
pub fn lookup(word: &str) -> Option<usize> {
    OUTLIERS.get(word).copied()
}
