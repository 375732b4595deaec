//! Result types shared by every analysis backend

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Maximum number of key phrases kept in a composite result
pub const MAX_KEY_PHRASES: usize = 10;

/// Maximum number of entities kept in a composite result
pub const MAX_ENTITIES: usize = 20;

/// Overall sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    /// Only ever reported by a remote provider
    Mixed,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Mixed => "MIXED",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Ok(Self::Positive),
            "NEGATIVE" => Ok(Self::Negative),
            "NEUTRAL" => Ok(Self::Neutral),
            "MIXED" => Ok(Self::Mixed),
            other => Err(Error::provider_call(format!(
                "unknown sentiment label: {other}"
            ))),
        }
    }
}

/// Sentiment label plus per-class scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    #[serde(rename = "sentiment")]
    pub label: SentimentLabel,
    pub positive_score: f32,
    pub negative_score: f32,
    pub neutral_score: f32,
    pub mixed_score: f32,
}

impl SentimentResult {
    /// Neutral baseline used when no lexicon word matched
    pub const UNMATCHED_NEUTRAL: f32 = 0.8;

    /// Result for null or blank text
    pub fn empty() -> Self {
        Self::neutral(1.0)
    }

    /// Result for text in which no lexicon word matched
    pub fn unmatched() -> Self {
        Self::neutral(Self::UNMATCHED_NEUTRAL)
    }

    /// Neutral label with the given neutral score and every other score zero
    pub fn neutral(neutral_score: f32) -> Self {
        Self {
            label: SentimentLabel::Neutral,
            positive_score: 0.0,
            negative_score: 0.0,
            neutral_score,
            mixed_score: 0.0,
        }
    }

    /// Build a result from provider scores, clamping each into [0, 1]
    pub fn from_scores(
        label: SentimentLabel,
        positive: f32,
        negative: f32,
        neutral: f32,
        mixed: f32,
    ) -> Self {
        Self {
            label,
            positive_score: clamp_unit(positive),
            negative_score: clamp_unit(negative),
            neutral_score: clamp_unit(neutral),
            mixed_score: clamp_unit(mixed),
        }
    }

    /// Whether every score lies within [0, 1]
    pub fn scores_in_range(&self) -> bool {
        [
            self.positive_score,
            self.negative_score,
            self.neutral_score,
            self.mixed_score,
        ]
        .iter()
        .all(|s| (0.0..=1.0).contains(s))
    }
}

fn clamp_unit(score: f32) -> f32 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Entity category
///
/// Local extraction only produces the five named variants. Provider types
/// outside that set are carried through unchanged as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityType {
    Email,
    Phone,
    Date,
    Url,
    Person,
    Other(String),
}

impl EntityType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Date => "DATE",
            Self::Url => "URL",
            Self::Person => "PERSON",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for EntityType {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "EMAIL" => Self::Email,
            "PHONE" => Self::Phone,
            "DATE" => Self::Date,
            "URL" => Self::Url,
            "PERSON" => Self::Person,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for EntityType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<EntityType> for String {
    fn from(value: EntityType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed span of text
///
/// Two entities are equal when their text and type are equal; confidence is
/// not part of identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub confidence: f32,
}

impl Entity {
    pub fn new(text: impl Into<String>, entity_type: EntityType, confidence: f32) -> Self {
        Self {
            text: text.into(),
            entity_type,
            confidence,
        }
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.entity_type == other.entity_type
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.entity_type.hash(state);
    }
}

/// Drop repeated (text, type) pairs keeping the first occurrence, then cap the length
pub fn dedup_entities(entities: impl IntoIterator<Item = Entity>, limit: usize) -> Vec<Entity> {
    let mut seen = HashSet::new();
    entities
        .into_iter()
        .filter(|entity| seen.insert((entity.text.clone(), entity.entity_type.clone())))
        .take(limit)
        .collect()
}

/// Drop repeated phrases keeping the first occurrence, then cap the length
pub fn dedup_phrases(phrases: impl IntoIterator<Item = String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    phrases
        .into_iter()
        .filter(|phrase| seen.insert(phrase.clone()))
        .take(limit)
        .collect()
}

/// Sentiment, key phrases and entities for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveResult {
    pub sentiment: SentimentResult,
    pub key_phrases: Vec<String>,
    pub entities: Vec<Entity>,
}

impl ComprehensiveResult {
    /// Combine the three analyses, enforcing uniqueness and the length caps
    pub fn new(sentiment: SentimentResult, key_phrases: Vec<String>, entities: Vec<Entity>) -> Self {
        Self {
            sentiment,
            key_phrases: dedup_phrases(key_phrases, MAX_KEY_PHRASES),
            entities: dedup_entities(entities, MAX_ENTITIES),
        }
    }
}

/// Which backend produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Remote,
    Local,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
        }
    }
}

/// A value tagged with the backend that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Sourced<T> {
    pub fn remote(value: T) -> Self {
        Self {
            value,
            source: Source::Remote,
        }
    }

    pub fn local(value: T) -> Self {
        Self {
            value,
            source: Source::Local,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_unmatched_sentiment_differ() {
        let empty = SentimentResult::empty();
        let unmatched = SentimentResult::unmatched();

        assert_eq!(empty.label, SentimentLabel::Neutral);
        assert_eq!(empty.neutral_score, 1.0);
        assert_eq!(unmatched.label, SentimentLabel::Neutral);
        assert_eq!(unmatched.neutral_score, 0.8);
        assert_eq!(unmatched.positive_score, 0.0);
        assert_eq!(unmatched.mixed_score, 0.0);
    }

    #[test]
    fn test_from_scores_clamps() {
        let result = SentimentResult::from_scores(SentimentLabel::Mixed, 1.4, -0.2, f32::NAN, 0.3);
        assert_eq!(result.positive_score, 1.0);
        assert_eq!(result.negative_score, 0.0);
        assert_eq!(result.neutral_score, 0.0);
        assert_eq!(result.mixed_score, 0.3);
        assert!(result.scores_in_range());
    }

    #[test]
    fn test_label_parsing_is_case_insensitive() {
        assert_eq!("positive".parse::<SentimentLabel>().unwrap(), SentimentLabel::Positive);
        assert_eq!(" Mixed ".parse::<SentimentLabel>().unwrap(), SentimentLabel::Mixed);
        assert!("ecstatic".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn test_entity_identity_ignores_confidence() {
        let a = Entity::new("a@b.com", EntityType::Email, 0.9);
        let b = Entity::new("a@b.com", EntityType::Email, 0.4);
        let c = Entity::new("a@b.com", EntityType::Url, 0.9);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_entity_type_round_trips_provider_names() {
        assert_eq!(EntityType::from("person"), EntityType::Person);
        assert_eq!(
            EntityType::from("ORGANIZATION"),
            EntityType::Other("ORGANIZATION".to_string())
        );

        let json = serde_json::to_string(&Entity::new("Acme", EntityType::from("ORGANIZATION"), 0.7))
            .unwrap();
        assert_eq!(json, r#"{"text":"Acme","type":"ORGANIZATION","confidence":0.7}"#);
    }

    #[test]
    fn test_comprehensive_result_enforces_invariants() {
        let phrases: Vec<String> = (0..15)
            .map(|i| format!("phrase{}", i % 12))
            .collect();
        let entities: Vec<Entity> = (0..30)
            .map(|i| Entity::new(format!("user{}@example.com", i % 25), EntityType::Email, 0.9))
            .collect();

        let result = ComprehensiveResult::new(SentimentResult::empty(), phrases, entities);

        assert_eq!(result.key_phrases.len(), MAX_KEY_PHRASES);
        assert_eq!(result.key_phrases[0], "phrase0");
        assert_eq!(result.entities.len(), MAX_ENTITIES);
        let unique: HashSet<_> = result.entities.iter().collect();
        assert_eq!(unique.len(), result.entities.len());
    }

    #[test]
    fn test_serialized_field_names() {
        let result = ComprehensiveResult::new(SentimentResult::unmatched(), vec![], vec![]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["sentiment"]["sentiment"], "NEUTRAL");
        assert!(value["sentiment"]["neutralScore"].is_number());
        assert!(value["keyPhrases"].is_array());
    }
}
