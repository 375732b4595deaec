//! JSON-over-HTTP text analytics provider
//!
//! Request and response shapes follow the AWS Comprehend detect APIs:
//!
//! - `POST {endpoint}/sentiment` returns `{"sentiment", "sentimentScore": {...}}`
//! - `POST {endpoint}/key-phrases` returns `{"keyPhrases": [{"text", "score"}]}`
//! - `POST {endpoint}/entities` returns `{"entities": [{"text", "type", "score"}]}`
//! - `POST {endpoint}/dominant-language` returns `{"languages": [{"languageCode", "score"}]}`
//!
//! The client sets no timeout and never retries; callers bound latency.

use crate::config::AnalysisConfig;
use crate::provider::AnalysisProvider;
use async_trait::async_trait;
use docsense_core::{Entity, EntityType, Error, Result, SentimentLabel, SentimentResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

pub struct HttpProvider {
    endpoint: Url,
    language_code: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentimentResponse {
    sentiment: String,
    #[serde(default)]
    sentiment_score: SentimentScore,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SentimentScore {
    #[serde(default, alias = "positive")]
    positive: f32,
    #[serde(default, alias = "negative")]
    negative: f32,
    #[serde(default, alias = "neutral")]
    neutral: f32,
    #[serde(default, alias = "mixed")]
    mixed: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyPhrasesResponse {
    key_phrases: Vec<KeyPhraseItem>,
}

#[derive(Debug, Deserialize)]
struct KeyPhraseItem {
    text: String,
}

#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    entities: Vec<EntityItem>,
}

#[derive(Debug, Deserialize)]
struct EntityItem {
    text: String,
    #[serde(rename = "type")]
    entity_type: String,
    score: f32,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    languages: Vec<LanguageItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageItem {
    language_code: String,
}

impl HttpProvider {
    /// Create a provider from analysis configuration
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: config.resolved_endpoint()?,
            language_code: config.language_code.clone(),
            api_key: config.resolved_api_key(),
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn url(&self, path: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config(format!("endpoint '{}' cannot be a base", self.endpoint)))?
            .pop_if_empty()
            .push(path);
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        text: &str,
        with_language: bool,
    ) -> Result<T> {
        let url = self.url(path)?;
        debug!("POST {}", url);

        let body = DetectRequest {
            text,
            language_code: with_language.then_some(self.language_code.as_str()),
        };

        let response = self
            .authorize(self.client.post(url))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::provider_call(format!("{path} request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::provider_call(format!("{path} returned status {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::provider_call(format!("{path} returned a malformed body: {e}")))
    }
}

#[async_trait]
impl AnalysisProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn probe(&self) -> Result<()> {
        let mut url = self.url("classifiers")?;
        url.query_pairs_mut().append_pair("maxResults", "1");

        let response = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(|e| Error::provider_call(format!("probe failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::provider_call(format!("probe returned status {status}")))
        }
    }

    async fn detect_sentiment(&self, text: &str) -> Result<SentimentResult> {
        let response: SentimentResponse = self.post("sentiment", text, true).await?;
        let label: SentimentLabel = response.sentiment.parse()?;
        let scores = response.sentiment_score;

        Ok(SentimentResult::from_scores(
            label,
            scores.positive,
            scores.negative,
            scores.neutral,
            scores.mixed,
        ))
    }

    async fn detect_key_phrases(&self, text: &str) -> Result<Vec<String>> {
        let response: KeyPhrasesResponse = self.post("key-phrases", text, true).await?;
        Ok(response.key_phrases.into_iter().map(|p| p.text).collect())
    }

    async fn detect_entities(&self, text: &str) -> Result<Vec<Entity>> {
        let response: EntitiesResponse = self.post("entities", text, true).await?;
        Ok(response
            .entities
            .into_iter()
            .map(|e| {
                Entity::new(
                    e.text,
                    EntityType::from(e.entity_type),
                    e.score.clamp(0.0, 1.0),
                )
            })
            .collect())
    }

    async fn detect_dominant_language(&self, text: &str) -> Result<String> {
        let response: LanguagesResponse = self.post("dominant-language", text, false).await?;
        response
            .languages
            .into_iter()
            .next()
            .map(|l| l.language_code)
            .ok_or_else(|| Error::provider_call("no language detected"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(endpoint: &str) -> HttpProvider {
        HttpProvider::from_config(&AnalysisConfig {
            endpoint: Some(endpoint.to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_url_joining_keeps_base_path() {
        let p = provider("http://localhost:9400/analytics");
        assert_eq!(
            p.url("key-phrases").unwrap().as_str(),
            "http://localhost:9400/analytics/key-phrases"
        );

        let p = provider("http://localhost:9400/");
        assert_eq!(p.url("entities").unwrap().as_str(), "http://localhost:9400/entities");
    }

    #[test]
    fn test_sentiment_score_accepts_both_casings() {
        let pascal: SentimentScore =
            serde_json::from_str(r#"{"Positive":0.9,"Negative":0.01,"Neutral":0.08,"Mixed":0.01}"#)
                .unwrap();
        let lower: SentimentScore =
            serde_json::from_str(r#"{"positive":0.9,"negative":0.01,"neutral":0.08,"mixed":0.01}"#)
                .unwrap();
        assert_eq!(pascal.positive, lower.positive);
        assert_eq!(pascal.mixed, lower.mixed);
    }

    #[test]
    fn test_request_body_shape() {
        let body = DetectRequest {
            text: "hello",
            language_code: Some("en"),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"text":"hello","languageCode":"en"}"#
        );

        let body = DetectRequest {
            text: "hello",
            language_code: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"text":"hello"}"#);
    }
}
