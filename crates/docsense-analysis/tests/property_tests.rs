//! Property tests for the local heuristics

use docsense_analysis::{EntityExtractor, KeyPhraseExtractor, LocalEngine, SentimentScorer};
use docsense_core::{SentimentLabel, MAX_ENTITIES, MAX_KEY_PHRASES};
use proptest::prelude::*;
use std::collections::HashSet;

fn lexicon_heavy_text() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "great", "bad", "terrible", "good", "report", "concern", "amazing", "error", "the",
        "Budget", "review!", "success,", "Jane", "Doe", "a@b.com", "555-123-4567", "1/2/2024",
    ]);
    prop::collection::vec(words, 0..60).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn sentiment_is_total_and_bounded(text in any::<String>()) {
        let result = SentimentScorer::new().score(&text);
        prop_assert!(result.scores_in_range());
        prop_assert_ne!(result.label, SentimentLabel::Mixed);
    }

    #[test]
    fn sentiment_is_bounded_on_lexicon_words(text in lexicon_heavy_text()) {
        let result = SentimentScorer::new().score(&text);
        prop_assert!(result.scores_in_range());
        prop_assert_eq!(result.mixed_score, 0.0);
    }

    #[test]
    fn key_phrases_are_unique_lowercase_and_capped(text in lexicon_heavy_text()) {
        let phrases = KeyPhraseExtractor::new().extract(&text);
        prop_assert!(phrases.len() <= MAX_KEY_PHRASES);
        let unique: HashSet<_> = phrases.iter().collect();
        prop_assert_eq!(unique.len(), phrases.len());
        for phrase in &phrases {
            prop_assert_eq!(phrase.clone(), phrase.to_lowercase());
        }
    }

    #[test]
    fn entities_are_unique_and_capped(text in any::<String>()) {
        let entities = EntityExtractor::new().unwrap().extract(&text);
        prop_assert!(entities.len() <= MAX_ENTITIES);
        let unique: HashSet<_> = entities.iter().collect();
        prop_assert_eq!(unique.len(), entities.len());
        for entity in &entities {
            prop_assert!(entity.confidence > 0.0 && entity.confidence <= 1.0);
        }
    }

    #[test]
    fn local_analysis_is_deterministic(text in lexicon_heavy_text()) {
        let engine = LocalEngine::new().unwrap();
        let first = serde_json::to_vec(&engine.analyze(&text)).unwrap();
        let second = serde_json::to_vec(&engine.analyze(&text)).unwrap();
        prop_assert_eq!(first, second);
    }
}
