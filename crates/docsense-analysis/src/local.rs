//! Deterministic local analysis engine

use crate::entities::EntityExtractor;
use crate::key_phrases::KeyPhraseExtractor;
use crate::provider::AnalysisProvider;
use crate::sentiment::SentimentScorer;
use async_trait::async_trait;
use docsense_core::{ComprehensiveResult, Entity, Result, SentimentResult};

/// The three local heuristics bundled together
///
/// Every method is total over its input. Construction can only fail if a
/// built-in pattern does not compile.
#[derive(Debug, Clone, Copy)]
pub struct LocalEngine {
    sentiment: SentimentScorer,
    key_phrases: KeyPhraseExtractor,
    entities: EntityExtractor,
}

impl LocalEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sentiment: SentimentScorer::new(),
            key_phrases: KeyPhraseExtractor::new(),
            entities: EntityExtractor::new()?,
        })
    }

    pub fn sentiment(&self, text: &str) -> SentimentResult {
        self.sentiment.score(text)
    }

    pub fn key_phrases(&self, text: &str) -> Vec<String> {
        self.key_phrases.extract(text)
    }

    pub fn entities(&self, text: &str) -> Vec<Entity> {
        self.entities.extract(text)
    }

    /// Run all three heuristics
    pub fn analyze(&self, text: &str) -> ComprehensiveResult {
        ComprehensiveResult::new(
            self.sentiment(text),
            self.key_phrases(text),
            self.entities(text),
        )
    }
}

#[async_trait]
impl AnalysisProvider for LocalEngine {
    fn name(&self) -> &str {
        "local"
    }

    async fn detect_sentiment(&self, text: &str) -> Result<SentimentResult> {
        Ok(self.sentiment(text))
    }

    async fn detect_key_phrases(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.key_phrases(text))
    }

    async fn detect_entities(&self, text: &str) -> Result<Vec<Entity>> {
        Ok(self.entities(text))
    }
}
