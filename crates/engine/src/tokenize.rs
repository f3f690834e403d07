//! 単語・文への分割

use regex::Regex;
use std::sync::OnceLock;

/// Sentence terminators. A run of them is a single boundary.
const SENTENCE_TERMINATORS: &str = r"[.!?]+";

fn sentence_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SENTENCE_TERMINATORS).expect("sentence pattern is valid"))
}

/// Whitespace-delimited tokens of the trimmed text.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.trim().split_whitespace()
}

/// Non-empty segments between sentence terminators.
///
/// Only zero-length segments are dropped, so a whitespace-only tail such as the `" "` in
/// `"Hi. "` still counts as a segment.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    sentence_boundary().split(text).filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_whitespace_runs() {
        let tokens: Vec<_> = words("  alpha \t beta\n\ngamma  ").collect();
        assert_eq!(tokens, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn words_keep_punctuation_attached() {
        let tokens: Vec<_> = words("Hello, world.").collect();
        assert_eq!(tokens, ["Hello,", "world."]);
    }

    #[test]
    fn consecutive_terminators_are_one_boundary() {
        let parts: Vec<_> = sentences("Wait...what?! Really.").collect();
        assert_eq!(parts, ["Wait", "what", " Really"]);
    }

    #[test]
    fn leading_and_trailing_empty_segments_are_dropped() {
        assert_eq!(sentences("...").count(), 0);
        assert_eq!(sentences("!Hi!").count(), 1);
    }

    #[test]
    fn whitespace_tail_counts_as_segment() {
        assert_eq!(sentences("Hi. ").count(), 2);
    }

    #[test]
    fn text_without_terminators_is_one_segment() {
        assert_eq!(sentences("no punctuation here").count(), 1);
    }
}
