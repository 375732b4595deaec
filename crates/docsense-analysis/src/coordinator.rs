//! Remote-or-local decision logic
//!
//! Each analysis kind is decided and executed on its own: a failed remote
//! sentiment call has no bearing on the key phrase or entity calls. Every
//! public operation completes; the worst case is the local result.

use crate::config::AnalysisConfig;
use crate::gateway::{RemoteAnalysisGateway, DEFAULT_LANGUAGE};
use crate::http::HttpProvider;
use crate::lexicon::is_blank;
use crate::local::LocalEngine;
use docsense_core::{ComprehensiveResult, Entity, Error, Result, SentimentResult, Sourced};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Which backend answers a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Remote,
    Local,
}

/// Pick the backend from configuration and cached gateway availability
pub fn select_backend(use_remote: bool, remote_available: bool) -> Backend {
    if use_remote && remote_available {
        Backend::Remote
    } else {
        Backend::Local
    }
}

/// The three analysis kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Sentiment,
    KeyPhrases,
    Entities,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sentiment => "sentiment",
            Self::KeyPhrases => "key_phrases",
            Self::Entities => "entities",
        }
    }
}

pub struct FallbackCoordinator {
    local: LocalEngine,
    gateway: RemoteAnalysisGateway,
    use_remote: bool,
}

impl FallbackCoordinator {
    pub fn new(local: LocalEngine, gateway: RemoteAnalysisGateway, use_remote: bool) -> Self {
        match select_backend(use_remote, gateway.is_available()) {
            Backend::Remote => info!(
                "Analysis coordinator using remote provider '{}' with local fallback",
                gateway.provider_name().unwrap_or("unknown")
            ),
            Backend::Local => info!("Analysis coordinator using local analysis only"),
        }

        Self {
            local,
            gateway,
            use_remote,
        }
    }

    /// A coordinator that never contacts a remote provider
    pub fn local_only_engine(local: LocalEngine) -> Self {
        Self::new(local, RemoteAnalysisGateway::unavailable(), false)
    }

    /// Build the coordinator described by the configuration.
    ///
    /// When remote use is enabled the HTTP provider is probed once here. A
    /// provider that cannot be built or probed leaves the coordinator on the
    /// local path. Only a broken built-in pattern is returned as an error.
    pub async fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let local = LocalEngine::new()?;

        let gateway = if config.use_remote_provider {
            match HttpProvider::from_config(config) {
                Ok(provider) => {
                    info!("Connecting to remote provider at {}", provider.endpoint());
                    RemoteAnalysisGateway::connect(Arc::new(provider)).await
                }
                Err(e) => {
                    warn!("Remote provider not configured: {}", e);
                    RemoteAnalysisGateway::unavailable()
                }
            }
        } else {
            RemoteAnalysisGateway::unavailable()
        };

        Ok(Self::new(local, gateway, config.use_remote_provider))
    }

    pub fn local(&self) -> &LocalEngine {
        &self.local
    }

    pub fn gateway(&self) -> &RemoteAnalysisGateway {
        &self.gateway
    }

    /// Backend that non-blank text will be sent to first
    pub fn backend(&self) -> Backend {
        select_backend(self.use_remote, self.gateway.is_available())
    }

    fn backend_for(&self, text: &str) -> Backend {
        // Blank text never reaches the provider
        if is_blank(text) {
            Backend::Local
        } else {
            self.backend()
        }
    }

    pub async fn analyze_sentiment(&self, text: &str) -> SentimentResult {
        self.analyze_sentiment_sourced(text).await.into_inner()
    }

    pub async fn extract_key_phrases(&self, text: &str) -> Vec<String> {
        self.extract_key_phrases_sourced(text).await.into_inner()
    }

    pub async fn extract_entities(&self, text: &str) -> Vec<Entity> {
        self.extract_entities_sourced(text).await.into_inner()
    }

    pub async fn analyze_sentiment_sourced(&self, text: &str) -> Sourced<SentimentResult> {
        let kind = AnalysisKind::Sentiment;
        let start = Instant::now();
        let result = match self.backend_for(text) {
            Backend::Local => Sourced::local(self.local.sentiment(text)),
            Backend::Remote => {
                let outcome = self.gateway.detect_sentiment(text).await;
                settle(kind, outcome, || self.local.sentiment(text))
            }
        };
        record(kind, &result, start);
        result
    }

    pub async fn extract_key_phrases_sourced(&self, text: &str) -> Sourced<Vec<String>> {
        let kind = AnalysisKind::KeyPhrases;
        let start = Instant::now();
        let result = match self.backend_for(text) {
            Backend::Local => Sourced::local(self.local.key_phrases(text)),
            Backend::Remote => {
                let outcome = self.gateway.detect_key_phrases(text).await;
                settle(kind, outcome, || self.local.key_phrases(text))
            }
        };
        record(kind, &result, start);
        result
    }

    pub async fn extract_entities_sourced(&self, text: &str) -> Sourced<Vec<Entity>> {
        let kind = AnalysisKind::Entities;
        let start = Instant::now();
        let result = match self.backend_for(text) {
            Backend::Local => Sourced::local(self.local.entities(text)),
            Backend::Remote => {
                let outcome = self.gateway.detect_entities(text).await;
                settle(kind, outcome, || self.local.entities(text))
            }
        };
        record(kind, &result, start);
        result
    }

    /// Run all three analyses concurrently and combine them
    pub async fn analyze_document(&self, text: &str) -> ComprehensiveResult {
        let (sentiment, key_phrases, entities) = tokio::join!(
            self.analyze_sentiment(text),
            self.extract_key_phrases(text),
            self.extract_entities(text),
        );
        ComprehensiveResult::new(sentiment, key_phrases, entities)
    }

    /// The purely local composite, for callers that gave up waiting on the remote path
    pub fn local_only(&self, text: &str) -> ComprehensiveResult {
        self.local.analyze(text)
    }

    /// Dominant language of the text; `"en"` whenever the provider cannot answer
    pub async fn detect_language(&self, text: &str) -> String {
        match self.backend_for(text) {
            Backend::Local => DEFAULT_LANGUAGE.to_string(),
            Backend::Remote => self.gateway.detect_dominant_language(text).await,
        }
    }
}

/// Keep a successful remote value, otherwise log and compute locally
fn settle<T>(kind: AnalysisKind, outcome: Result<T>, local: impl FnOnce() -> T) -> Sourced<T> {
    match outcome {
        Ok(value) => Sourced::remote(value),
        Err(e) => {
            let reason = fallback_reason(&e);
            warn!(
                "Remote {} analysis failed, falling back to local: {}",
                kind.as_str(),
                e
            );
            metrics::counter!(
                "docsense_fallback_total",
                "kind" => kind.as_str(),
                "reason" => reason
            )
            .increment(1);
            Sourced::local(local())
        }
    }
}

/// Metric label for why the remote value was not used
fn fallback_reason(error: &Error) -> &'static str {
    match error {
        Error::ProviderUnavailable => "unavailable",
        e if e.is_provider_failure() => "call_failed",
        _ => "error",
    }
}

fn record<T>(kind: AnalysisKind, result: &Sourced<T>, start: Instant) {
    let source = result.source.as_str();
    debug!("{} analysis answered by {} backend", kind.as_str(), source);
    metrics::counter!(
        "docsense_analysis_total",
        "kind" => kind.as_str(),
        "source" => source
    )
    .increment(1);
    metrics::histogram!("docsense_analysis_latency_us", "kind" => kind.as_str())
        .record(start.elapsed().as_micros() as f64);
}
