//! Analysis capability trait shared by the remote and local backends

use async_trait::async_trait;
use docsense_core::{Entity, Error, Result, SentimentResult};

/// Text analytics capabilities
///
/// Implemented by the remote HTTP provider and by the local engine, so both
/// backends are interchangeable behind the coordinator.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Lightweight connectivity check, run once when a gateway is built
    async fn probe(&self) -> Result<()> {
        Ok(())
    }

    async fn detect_sentiment(&self, text: &str) -> Result<SentimentResult>;

    async fn detect_key_phrases(&self, text: &str) -> Result<Vec<String>>;

    async fn detect_entities(&self, text: &str) -> Result<Vec<Entity>>;

    /// Dominant language code of the text (e.g. "en")
    async fn detect_dominant_language(&self, _text: &str) -> Result<String> {
        Err(Error::provider_call(format!(
            "{} does not support language detection",
            self.name()
        )))
    }
}
