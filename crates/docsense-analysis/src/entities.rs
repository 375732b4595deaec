//! Pattern-based entity extraction (local fallback)

use crate::lexicon::is_blank;
use crate::patterns::PatternStore;
use docsense_core::{dedup_entities, Entity, Result, MAX_ENTITIES};

/// Entity extractor using regex rules over the original-case text
#[derive(Debug, Clone, Copy)]
pub struct EntityExtractor {
    patterns: &'static PatternStore,
}

impl EntityExtractor {
    /// Create an extractor backed by the shared pattern store
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: PatternStore::shared()?,
        })
    }

    /// Extract up to twenty unique entities.
    ///
    /// Matches are reported rule by rule (email, phone, date, URL, person)
    /// and left to right within a rule. Repeated (text, type) pairs keep
    /// their first occurrence.
    pub fn extract(&self, text: &str) -> Vec<Entity> {
        if is_blank(text) {
            return Vec::new();
        }

        let matches = self.patterns.rules().iter().flat_map(|rule| {
            rule.regex
                .find_iter(text)
                .map(|m| Entity::new(m.as_str(), rule.entity_type.clone(), rule.confidence))
        });

        dedup_entities(matches, MAX_ENTITIES)
    }
}
