//! docsense analysis engine
//!
//! Sentiment, key phrase and entity analysis for free text extracted from
//! documents.
//!
//! Two interchangeable backends implement the same capabilities:
//! - Local: deterministic lexicon, frequency and regex heuristics
//! - Remote: an HTTP text analytics provider behind a gateway that probes
//!   availability once and reports every failure as a value
//!
//! The [`FallbackCoordinator`] picks a backend per call and falls back to the
//! local result whenever the remote path is disabled, unavailable or fails.

pub mod config;
pub mod coordinator;
pub mod entities;
pub mod gateway;
pub mod http;
pub mod key_phrases;
pub mod lexicon;
pub mod local;
pub mod patterns;
pub mod provider;
pub mod sentiment;

pub use config::AnalysisConfig;
pub use coordinator::{select_backend, AnalysisKind, Backend, FallbackCoordinator};
pub use entities::EntityExtractor;
pub use gateway::{RemoteAnalysisGateway, DEFAULT_LANGUAGE};
pub use http::HttpProvider;
pub use key_phrases::KeyPhraseExtractor;
pub use lexicon::Lexicon;
pub use local::LocalEngine;
pub use patterns::PatternStore;
pub use provider::AnalysisProvider;
pub use sentiment::SentimentScorer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::coordinator::{Backend, FallbackCoordinator};
    pub use crate::gateway::RemoteAnalysisGateway;
    pub use crate::local::LocalEngine;
    pub use crate::provider::AnalysisProvider;
    pub use crate::AnalysisConfig;
}
