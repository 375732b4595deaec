//! Server configuration
//!
//! Layered in order: built-in defaults, an optional YAML file,
//! `DOCSENSE__`-prefixed environment variables, then command line flags.

use anyhow::Context;
use axum::http::HeaderValue;
use config::{Config, Environment, File, FileFormat};
use docsense_analysis::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use crate::cli::Cli;

/// Environment prefix; nested keys are separated by a double underscore,
/// e.g. `DOCSENSE__ANALYSIS__USE_REMOTE_PROVIDER=true`
pub const ENV_PREFIX: &str = "DOCSENSE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub listen: String,

    /// Listen port
    pub port: u16,

    /// Upper bound on one document analysis before the local result is used
    pub analysis_timeout_ms: u64,

    /// Origin allowed by CORS
    pub allowed_origin: String,

    /// Analysis backend selection
    pub analysis: AnalysisConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0".to_string(),
            port: 8080,
            analysis_timeout_ms: 10_000,
            allowed_origin: "http://localhost:3000".to_string(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment, then apply CLI overrides
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = Self::from_sources(&cli.config)?;
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Defaults layered with an optional YAML file and the environment
    pub fn from_sources(config_path: &str) -> anyhow::Result<Self> {
        Config::builder()
            .add_source(File::new(config_path, FileFormat::Yaml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .with_context(|| format!("Failed to load configuration from {config_path}"))
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(listen) = &cli.listen {
            self.listen = listen.clone();
        }

        if let Some(port) = cli.port {
            self.port = port;
        }

        if cli.use_remote {
            self.analysis.use_remote_provider = true;
        }

        if let Some(region) = &cli.region {
            self.analysis.region = region.clone();
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.listen, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.listen, self.port))
    }

    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_millis(self.analysis_timeout_ms)
    }

    pub fn cors_origin(&self) -> anyhow::Result<HeaderValue> {
        HeaderValue::from_str(&self.allowed_origin)
            .with_context(|| format!("Invalid allowed origin {}", self.allowed_origin))
    }
}
