//! docsense core
//!
//! Types and errors shared across docsense components.
//!
//! This crate provides:
//! - The analysis result model (sentiment, key phrases, entities)
//! - Error types and result handling
//! - Provenance tagging for values produced by a remote or local backend

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    dedup_entities, dedup_phrases, ComprehensiveResult, Entity, EntityType, SentimentLabel,
    SentimentResult, Source, Sourced, MAX_ENTITIES, MAX_KEY_PHRASES,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        ComprehensiveResult, Entity, EntityType, SentimentLabel, SentimentResult, Source, Sourced,
    };
}
