//! Simplified Flesch-Kincaid style readability score.

use text_stats_shared_kernel::ReadabilityScore;

const BASE: f64 = 100.0;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const WORD_LENGTH_WEIGHT: f64 = 84.6;
const OFFSET: f64 = 1.015;

/// Averages the score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextAverages {
    pub words_per_sentence: f64,
    pub syllables_per_word: f64,
}

impl TextAverages {
    /// `sentences == 0` is treated as one sentence. Zero words gives zero averages.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(words: usize, sentences: usize, syllables: usize) -> Self {
        if words == 0 {
            return Self::default();
        }
        Self {
            words_per_sentence: words as f64 / sentences.max(1) as f64,
            syllables_per_word: syllables as f64 / words as f64,
        }
    }

    /// Unrounded, unclamped score.
    pub fn raw_score(&self) -> f64 {
        BASE - (SENTENCE_LENGTH_WEIGHT * self.words_per_sentence
            + WORD_LENGTH_WEIGHT * self.syllables_per_word
            - OFFSET)
    }

    pub fn score(&self) -> ReadabilityScore {
        ReadabilityScore::from_raw(self.raw_score())
    }
}
