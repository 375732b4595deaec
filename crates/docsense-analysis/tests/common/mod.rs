//! Mock providers for testing
//!
//! Configurable implementations of the AnalysisProvider trait for exercising
//! the gateway and coordinator fallback paths.

#![allow(dead_code)]

use async_trait::async_trait;
use docsense_analysis::AnalysisProvider;
use docsense_core::{Entity, EntityType, Error, Result, SentimentLabel, SentimentResult};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// Which capabilities a mock provider should fail
#[derive(Debug, Clone, Copy, Default)]
pub struct Failures {
    pub probe: bool,
    pub sentiment: bool,
    pub key_phrases: bool,
    pub entities: bool,
    pub language: bool,
}

impl Failures {
    pub fn all() -> Self {
        Self {
            probe: false,
            sentiment: true,
            key_phrases: true,
            entities: true,
            language: true,
        }
    }
}

/// A configurable mock provider that returns fixed "remote" answers
pub struct MockProvider {
    name: String,
    failures: Failures,
    latency: Option<Duration>,
    probe_calls: AtomicU32,
    calls: AtomicU32,
}

impl MockProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            failures: Failures::default(),
            latency: None,
            probe_calls: AtomicU32::new(0),
            calls: AtomicU32::new(0),
        }
    }

    /// Set which calls fail
    pub fn with_failures(mut self, failures: Failures) -> Self {
        self.failures = failures;
        self
    }

    /// Fail the startup probe
    pub fn unreachable(mut self) -> Self {
        self.failures.probe = true;
        self
    }

    /// Set simulated latency for every capability call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of capability calls received (excluding the probe)
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn probe_count(&self) -> u32 {
        self.probe_calls.load(Ordering::Relaxed)
    }

    async fn enter(&self, fail: bool, capability: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if fail {
            Err(Error::provider_call(format!("simulated {capability} failure")))
        } else {
            Ok(())
        }
    }
}

/// The sentiment every healthy mock returns
pub fn remote_sentiment() -> SentimentResult {
    SentimentResult::from_scores(SentimentLabel::Mixed, 0.4, 0.35, 0.05, 0.2)
}

/// The key phrases every healthy mock returns
pub fn remote_key_phrases() -> Vec<String> {
    vec!["quarterly revenue".to_string(), "the board".to_string()]
}

/// The entities every healthy mock returns
pub fn remote_entities() -> Vec<Entity> {
    vec![
        Entity::new("Acme Corp", EntityType::from("ORGANIZATION"), 0.97),
        Entity::new("Jane Doe", EntityType::Person, 0.99),
    ]
}

#[async_trait]
impl AnalysisProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe(&self) -> Result<()> {
        self.probe_calls.fetch_add(1, Ordering::Relaxed);
        if self.failures.probe {
            Err(Error::provider_call("simulated probe failure"))
        } else {
            Ok(())
        }
    }

    async fn detect_sentiment(&self, _text: &str) -> Result<SentimentResult> {
        self.enter(self.failures.sentiment, "sentiment").await?;
        Ok(remote_sentiment())
    }

    async fn detect_key_phrases(&self, _text: &str) -> Result<Vec<String>> {
        self.enter(self.failures.key_phrases, "key phrase").await?;
        Ok(remote_key_phrases())
    }

    async fn detect_entities(&self, _text: &str) -> Result<Vec<Entity>> {
        self.enter(self.failures.entities, "entity").await?;
        Ok(remote_entities())
    }

    async fn detect_dominant_language(&self, _text: &str) -> Result<String> {
        self.enter(self.failures.language, "language").await?;
        Ok("de".to_string())
    }
}
