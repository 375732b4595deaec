//! Lexicon-based sentiment scorer (local fallback)
//!
//! Each whitespace token is cleaned and looked up in the merged positive and
//! negative weight tables. Unknown words are ignored. The label is derived
//! from the average weight of the matched words.

use crate::lexicon::{clean_word, is_blank, words, Lexicon};
use docsense_core::{SentimentLabel, SentimentResult};

/// Average weight above which text is positive
const POSITIVE_THRESHOLD: f64 = 0.5;

/// Average weight below which text is negative
const NEGATIVE_THRESHOLD: f64 = -0.5;

#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer {
    lexicon: &'static Lexicon,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::shared())
    }

    pub fn with_lexicon(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score the text. Never fails.
    pub fn score(&self, text: &str) -> SentimentResult {
        if is_blank(text) {
            return SentimentResult::empty();
        }

        let lower = text.to_lowercase();
        let (total, matched) = words(&lower)
            .filter_map(|token| self.lexicon.weight(&clean_word(token)))
            .fold((0.0_f64, 0_usize), |(sum, count), weight| {
                (sum + weight, count + 1)
            });

        scores_from_average(total, matched)
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn scores_from_average(total: f64, matched: usize) -> SentimentResult {
    // Baseline neutral is 0.8 here, not the 1.0 used for blank text.
    if matched == 0 {
        return SentimentResult::unmatched();
    }

    let average = total / matched as f64;

    if average > POSITIVE_THRESHOLD {
        let positive = (average as f32).min(1.0);
        SentimentResult {
            label: SentimentLabel::Positive,
            positive_score: positive,
            negative_score: 0.0,
            neutral_score: 1.0 - positive,
            mixed_score: 0.0,
        }
    } else if average < NEGATIVE_THRESHOLD {
        let negative = (average.abs() as f32).min(1.0);
        SentimentResult {
            label: SentimentLabel::Negative,
            positive_score: 0.0,
            negative_score: negative,
            neutral_score: 1.0 - negative,
            mixed_score: 0.0,
        }
    } else {
        SentimentResult::neutral(1.0)
    }
}
