use serde::{Deserialize, Serialize};
use text_stats_shared_kernel::{CharCount, ReadabilityScore, SentenceCount, WordCount};

use crate::readability::TextAverages;
use crate::syllables::estimate_syllables;
use crate::tokenize;

/// Metrics of a single block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub word_count: WordCount,
    pub character_count: CharCount,
    pub sentence_count: SentenceCount,
    pub readability_score: ReadabilityScore,
}

/// [`AnalysisResult`] together with the intermediate values of the score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBreakdown {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub syllable_count: usize,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
}

/// Stateless text analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalyzer;

impl TextAnalyzer {
    pub fn analyze(text: &str) -> AnalysisResult {
        Self::analyze_detailed(text).result
    }

    /// Blank input (empty after trimming) yields all zeros.
    pub fn analyze_detailed(text: &str) -> AnalysisBreakdown {
        if text.trim().is_empty() {
            return AnalysisBreakdown::default();
        }

        let (words, syllables) = tokenize::words(text)
            .fold((0usize, 0usize), |(words, syllables), word| {
                (words + 1, syllables + estimate_syllables(word))
            });
        let sentences = tokenize::sentences(text).count();
        // 空白・記号も含めた元テキストの文字数
        let chars = bytecount::num_chars(text.as_bytes());

        let averages = TextAverages::new(words, sentences, syllables);
        let result = AnalysisResult {
            word_count: WordCount::new(words),
            character_count: CharCount::new(chars),
            sentence_count: SentenceCount::new(sentences),
            readability_score: averages.score(),
        };

        log::trace!(
            "analyzed {chars} chars: {words} words, {sentences} sentences, {syllables} syllables, score {}",
            result.readability_score
        );

        AnalysisBreakdown {
            result,
            syllable_count: syllables,
            avg_words_per_sentence: averages.words_per_sentence,
            avg_syllables_per_word: averages.syllables_per_word,
        }
    }
}

/// Analyze `text`. Never fails; see [`TextAnalyzer::analyze_detailed`].
pub fn analyze(text: &str) -> AnalysisResult {
    TextAnalyzer::analyze(text)
}

pub fn analyze_detailed(text: &str) -> AnalysisBreakdown {
    TextAnalyzer::analyze_detailed(text)
}
