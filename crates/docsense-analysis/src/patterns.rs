//! Compiled entity rules
//!
//! Rules are compiled once and shared read-only. Their order is significant:
//! entity extraction reports matches rule by rule in the order listed here.
//!
//! Digit, space and word classes are spelled out as ASCII sets; the regex
//! crate's `\d`, `\s` and `\w` are Unicode-aware.

use docsense_core::{EntityType, Result};
use once_cell::sync::OnceCell;
use regex::Regex;

static SHARED: OnceCell<PatternStore> = OnceCell::new();

fn builtin_rules() -> [(EntityType, &'static str, f32); 5] {
    [
        (
            EntityType::Email,
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
            0.9,
        ),
        (
            EntityType::Phone,
            r"\b[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}\b",
            0.8,
        ),
        (
            EntityType::Date,
            r"\b[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{4}\b",
            0.7,
        ),
        (
            EntityType::Url,
            r"\b[Hh][Tt][Tt][Pp][Ss]?://[A-Za-z0-9_.-]+\.[A-Za-z]{2,}[/A-Za-z0-9_.-]*\b",
            0.9,
        ),
        (
            EntityType::Person,
            r"\b[A-Z][a-z]{2,}[ \t\n\x0B\f\r][A-Z][a-z]{2,}\b",
            0.6,
        ),
    ]
}

/// A single entity rule with its fixed confidence
#[derive(Debug)]
pub struct PatternRule {
    pub entity_type: EntityType,
    pub regex: Regex,
    pub confidence: f32,
}

/// Ordered set of compiled entity rules
#[derive(Debug)]
pub struct PatternStore {
    rules: Vec<PatternRule>,
}

impl PatternStore {
    /// Compile the built-in rules
    pub fn new() -> Result<Self> {
        let rules = builtin_rules()
            .into_iter()
            .map(|(entity_type, pattern, confidence)| {
                let regex = Regex::new(pattern).map_err(|e| {
                    docsense_core::Error::pattern(format!(
                        "Failed to compile {entity_type} regex: {e}"
                    ))
                })?;
                Ok(PatternRule {
                    entity_type,
                    regex,
                    confidence,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// The process-wide store, compiled on first use
    pub fn shared() -> Result<&'static PatternStore> {
        SHARED.get_or_try_init(Self::new)
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }
}
