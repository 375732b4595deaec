//! Analyzed document records

use chrono::{Local, NaiveDateTime};
use docsense_analysis::lexicon::{is_blank, trim_blank, words};
use docsense_core::ComprehensiveResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Average reading speed used for the reading time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Number of characters kept in the summary
pub const SUMMARY_CHARS: usize = 200;

pub const SUPPORTED_FILE_TYPES: [&str; 3] = ["pdf", "docx", "txt"];

/// Filename recorded when the client supplies none
pub const DEFAULT_FILENAME: &str = "document.txt";

const ANALYZED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Lowercased extension of `filename` when it is one of the supported types
pub fn file_type(filename: &str) -> Option<String> {
    let (_, extension) = filename.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();
    SUPPORTED_FILE_TYPES
        .contains(&extension.as_str())
        .then_some(extension)
}

/// Size and readability figures derived from the raw text
///
/// Blank text has no reading time or summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub word_count: usize,
    pub character_count: usize,
    pub reading_time: Option<String>,
    pub summary: Option<String>,
}

impl TextMetrics {
    pub fn measure(text: &str) -> Self {
        if is_blank(text) {
            return Self::default();
        }

        let word_count = words(trim_blank(text)).count();
        let character_count = text.chars().count();
        Self {
            word_count,
            character_count,
            reading_time: Some(reading_time(word_count)),
            summary: Some(summarize(text, character_count)),
        }
    }
}

fn reading_time(word_count: usize) -> String {
    let minutes = (word_count / WORDS_PER_MINUTE).max(1);
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}

fn summarize(text: &str, character_count: usize) -> String {
    if character_count <= SUMMARY_CHARS {
        return text.to_string();
    }
    let mut summary: String = text.chars().take(SUMMARY_CHARS).collect();
    summary.push_str("...");
    summary
}

/// One analyzed document as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    pub filename: String,
    pub file_type: String,
    /// Size of the submitted text in bytes
    pub file_size: usize,
    pub word_count: usize,
    pub character_count: usize,
    pub reading_time: Option<String>,
    pub summary: Option<String>,
    /// Dominant language code, `en` when it could not be detected
    pub language: String,
    pub analysis: ComprehensiveResult,
    #[serde(with = "analyzed_at")]
    pub analyzed_at: NaiveDateTime,
}

impl DocumentRecord {
    /// Build a record with a fresh id, stamped with the local time
    pub fn new(
        filename: String,
        file_type: String,
        text: &str,
        language: String,
        analysis: ComprehensiveResult,
    ) -> Self {
        let metrics = TextMetrics::measure(text);
        Self {
            id: Uuid::new_v4().to_string(),
            filename,
            file_type,
            file_size: text.len(),
            word_count: metrics.word_count,
            character_count: metrics.character_count,
            reading_time: metrics.reading_time,
            summary: metrics.summary,
            language,
            analysis,
            analyzed_at: Local::now().naive_local(),
        }
    }
}

mod analyzed_at {
    use super::ANALYZED_AT_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(ANALYZED_AT_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, ANALYZED_AT_FORMAT).map_err(serde::de::Error::custom)
    }
}
