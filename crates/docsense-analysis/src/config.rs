//! Configuration for the analysis engine and its remote provider

use docsense_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "DOCSENSE_PROVIDER_API_KEY";

/// Analysis engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Try the remote provider before the local heuristics
    #[serde(default)]
    pub use_remote_provider: bool,

    /// Provider region, used to derive the endpoint when none is given
    #[serde(default = "default_region")]
    pub region: String,

    /// Provider base URL
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Language code sent with every analysis request
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// Bearer credential for the provider
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            use_remote_provider: false,
            region: default_region(),
            endpoint: None,
            language_code: default_language_code(),
            api_key: None,
        }
    }
}

impl AnalysisConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("invalid analysis config: {e}")))
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// The provider base URL, derived from the region when not set explicitly
    pub fn resolved_endpoint(&self) -> Result<Url> {
        let raw = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://comprehend.{}.amazonaws.com", self.region),
        };

        let url = Url::parse(&raw)
            .map_err(|e| Error::config(format!("invalid provider endpoint '{raw}': {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::config(format!(
                "unsupported provider endpoint scheme '{scheme}'"
            ))),
        }
    }

    /// The configured API key, falling back to the environment
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_language_code() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::from_yaml("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert!(!config.use_remote_provider);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.language_code, "en");
    }

    #[test]
    fn test_endpoint_derived_from_region() {
        let config = AnalysisConfig::from_yaml("region: eu-west-2").unwrap();
        let url = config.resolved_endpoint().unwrap();
        assert_eq!(url.host_str(), Some("comprehend.eu-west-2.amazonaws.com"));
    }

    #[test]
    fn test_explicit_endpoint() {
        let yaml = r#"
use_remote_provider: true
endpoint: http://127.0.0.1:9400/analytics
language_code: de
"#;
        let config = AnalysisConfig::from_yaml(yaml).unwrap();
        assert!(config.use_remote_provider);
        assert_eq!(
            config.resolved_endpoint().unwrap().as_str(),
            "http://127.0.0.1:9400/analytics"
        );
        assert_eq!(config.language_code, "de");
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = AnalysisConfig {
            endpoint: Some("ftp://files.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.resolved_endpoint(), Err(Error::Config(_))));

        let config = AnalysisConfig {
            endpoint: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(config.resolved_endpoint().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.yaml");
        std::fs::write(&path, "use_remote_provider: true\nregion: ap-south-1\n").unwrap();

        let config = AnalysisConfig::from_file(&path).unwrap();
        assert!(config.use_remote_provider);
        assert_eq!(config.region, "ap-south-1");
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let config = AnalysisConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("secret"));
    }
}
