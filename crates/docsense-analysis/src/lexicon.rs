//! Sentiment word weights and stop words
//!
//! The tables are built once on first use and shared read-only for the life
//! of the process.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 1.0),
    ("great", 2.0),
    ("excellent", 2.0),
    ("amazing", 2.0),
    ("wonderful", 1.5),
    ("fantastic", 2.0),
    ("awesome", 1.5),
    ("perfect", 2.0),
    ("love", 1.5),
    ("best", 1.5),
];

const MORE_POSITIVE_WORDS: &[(&str, f64)] = &[
    ("success", 1.0),
    ("achieve", 1.0),
    ("benefit", 1.0),
    ("improve", 1.0),
    ("positive", 1.0),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -1.0),
    ("terrible", -2.0),
    ("awful", -2.0),
    ("horrible", -2.0),
    ("worst", -2.0),
    ("hate", -1.5),
    ("fail", -1.5),
    ("problem", -1.0),
    ("issue", -1.0),
    ("error", -1.0),
];

const MORE_NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("wrong", -1.0),
    ("difficult", -0.5),
    ("challenge", -0.5),
    ("concern", -0.5),
    ("negative", -1.0),
];

const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were", "be", "been", "have", "has", "had", "will", "would", "could", "should", "this",
    "that", "these", "those", "a", "an",
];

static SHARED: Lazy<Lexicon> = Lazy::new(Lexicon::build);

/// Merged word-weight tables plus the stop-word set
#[derive(Debug)]
pub struct Lexicon {
    positive: HashMap<&'static str, f64>,
    negative: HashMap<&'static str, f64>,
    stop_words: HashSet<&'static str>,
}

impl Lexicon {
    /// The process-wide lexicon
    pub fn shared() -> &'static Lexicon {
        &SHARED
    }

    fn build() -> Self {
        Self {
            positive: merge(&[POSITIVE_WORDS, MORE_POSITIVE_WORDS]),
            negative: merge(&[NEGATIVE_WORDS, MORE_NEGATIVE_WORDS]),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Weight of a cleaned, lowercase word; positive tables are consulted first
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.positive
            .get(word)
            .or_else(|| self.negative.get(word))
            .copied()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

// Earlier tables win when a word appears in more than one.
fn merge(tables: &[&[(&'static str, f64)]]) -> HashMap<&'static str, f64> {
    let mut merged = HashMap::new();
    for table in tables {
        for &(word, weight) in table.iter() {
            merged.entry(word).or_insert(weight);
        }
    }
    merged
}

/// Text made only of spaces and control characters (U+0000 to U+0020)
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c <= ' ')
}

/// `text` with leading and trailing spaces and control characters removed
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Split on runs of ASCII whitespace; other separators stay inside a word
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
        .filter(|word| !word.is_empty())
}

/// Strip every character that is not an ASCII letter
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase()
}
