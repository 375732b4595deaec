//! Frequency-based key phrase extraction (local fallback)

use crate::lexicon::{clean_word, is_blank, words, Lexicon};
use docsense_core::MAX_KEY_PHRASES;
use std::collections::HashMap;

/// Minimum cleaned length for a word to count at all
const MIN_VALID_LEN: usize = 3;

/// Minimum cleaned length for a word to count as a unigram phrase
const MIN_UNIGRAM_LEN: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct KeyPhraseExtractor {
    lexicon: &'static Lexicon,
    limit: usize,
}

impl KeyPhraseExtractor {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::shared(),
            limit: MAX_KEY_PHRASES,
        }
    }

    /// Extract up to ten repeated unigrams and bigrams, most frequent first
    pub fn extract(&self, text: &str) -> Vec<String> {
        if is_blank(text) {
            return Vec::new();
        }

        let lower = text.to_lowercase();
        let cleaned: Vec<String> = words(&lower).map(clean_word).collect();

        let mut counts = PhraseCounts::default();
        for (i, word) in cleaned.iter().enumerate() {
            let valid = self.is_valid(word);
            if valid && word.len() >= MIN_UNIGRAM_LEN {
                counts.add(word.clone());
            }

            if let Some(next) = cleaned.get(i + 1) {
                if valid && self.is_valid(next) {
                    counts.add(format!("{word} {next}"));
                }
            }
        }

        counts.top(self.limit)
    }

    fn is_valid(&self, word: &str) -> bool {
        word.len() >= MIN_VALID_LEN && !self.lexicon.is_stop_word(word)
    }
}

impl Default for KeyPhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Phrase counts kept in discovery order
#[derive(Default)]
struct PhraseCounts {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl PhraseCounts {
    fn add(&mut self, phrase: String) {
        match self.index.get(&phrase) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(phrase.clone(), self.entries.len());
                self.entries.push((phrase, 1));
            }
        }
    }

    /// Phrases seen more than once, by descending count; ties keep discovery order
    fn top(self, limit: usize) -> Vec<String> {
        let mut repeated: Vec<_> = self
            .entries
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .collect();
        repeated.sort_by(|a, b| b.1.cmp(&a.1));
        repeated
            .into_iter()
            .take(limit)
            .map(|(phrase, _)| phrase)
            .collect()
    }
}
