//! Remote provider gateway
//!
//! Availability is probed once at construction and cached for the life of
//! the gateway. Every capability call returns an explicit `Result`; any
//! provider error is reported as a provider-call failure. No retries.

use crate::provider::AnalysisProvider;
use docsense_core::{Entity, Error, Result, SentimentResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Language reported when detection is unavailable or fails
pub const DEFAULT_LANGUAGE: &str = "en";

pub struct RemoteAnalysisGateway {
    provider: Option<Arc<dyn AnalysisProvider>>,
    available: bool,
}

impl RemoteAnalysisGateway {
    /// Probe the provider once and cache the outcome
    pub async fn connect(provider: Arc<dyn AnalysisProvider>) -> Self {
        let available = match provider.probe().await {
            Ok(()) => {
                info!("Remote provider '{}' is available", provider.name());
                true
            }
            Err(e) => {
                warn!(
                    "Remote provider '{}' is not available: {}. Local analysis will be used.",
                    provider.name(),
                    e
                );
                false
            }
        };

        Self {
            provider: Some(provider),
            available,
        }
    }

    /// A gateway with no provider; every call fails without a network attempt
    pub fn unavailable() -> Self {
        Self {
            provider: None,
            available: false,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    fn ready(&self) -> Result<&dyn AnalysisProvider> {
        match &self.provider {
            Some(provider) if self.available => Ok(provider.as_ref()),
            _ => Err(Error::ProviderUnavailable),
        }
    }

    pub async fn detect_sentiment(&self, text: &str) -> Result<SentimentResult> {
        let provider = self.ready()?;
        provider
            .detect_sentiment(text)
            .await
            .map_err(|e| call_failure("sentiment", e))
    }

    pub async fn detect_key_phrases(&self, text: &str) -> Result<Vec<String>> {
        let provider = self.ready()?;
        provider
            .detect_key_phrases(text)
            .await
            .map_err(|e| call_failure("key phrases", e))
    }

    pub async fn detect_entities(&self, text: &str) -> Result<Vec<Entity>> {
        let provider = self.ready()?;
        provider
            .detect_entities(text)
            .await
            .map_err(|e| call_failure("entities", e))
    }

    /// Dominant language, or `"en"` when the provider is unavailable or fails
    pub async fn detect_dominant_language(&self, text: &str) -> String {
        let Ok(provider) = self.ready() else {
            return DEFAULT_LANGUAGE.to_string();
        };

        match provider.detect_dominant_language(text).await {
            Ok(code) => code,
            Err(e) => {
                warn!("Language detection failed, assuming '{}': {}", DEFAULT_LANGUAGE, e);
                DEFAULT_LANGUAGE.to_string()
            }
        }
    }
}

fn call_failure(capability: &str, error: Error) -> Error {
    match error {
        Error::ProviderCall(msg) => Error::ProviderCall(format!("{capability}: {msg}")),
        other => Error::provider_call(format!("{capability}: {other}")),
    }
}
