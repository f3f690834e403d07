//! Heuristic syllable estimation.
//!
//! The estimate is intentionally rough: it drops one silent ending, ignores a leading `y`,
//! then counts vowel groups. The readability constants are tuned against this exact
//! behaviour, so it is not meant to be linguistically accurate.

use regex::Regex;
use std::sync::OnceLock;

/// Words of this many characters or fewer are a single syllable.
const SHORT_WORD_LEN: usize = 3;

/// Alternatives are tried in order at the leftmost position; they end in different
/// characters, so at most one can match.
const SILENT_ENDING: &str = r"(?:[^aeiouy]es|ed|[^aeiouy]e)$";
const LEADING_Y: &str = r"^y";
const VOWEL_GROUP: &str = r"[aeiouy]+";

struct Patterns {
    silent_ending: Regex,
    leading_y: Regex,
    vowel_group: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        silent_ending: Regex::new(SILENT_ENDING).expect("silent ending pattern is valid"),
        leading_y: Regex::new(LEADING_Y).expect("leading y pattern is valid"),
        vowel_group: Regex::new(VOWEL_GROUP).expect("vowel group pattern is valid"),
    })
}

/// Estimate the number of syllables in `word`. Always at least 1.
pub fn estimate_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    if lower.chars().count() <= SHORT_WORD_LEN {
        return 1;
    }

    let patterns = patterns();
    let stem = patterns.silent_ending.replacen(&lower, 1, "");
    let stem = patterns.leading_y.replacen(&stem, 1, "");

    patterns.vowel_group.find_iter(&stem).count().max(1)
}
