//! Error types for docsense

/// Result type alias using docsense's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for docsense operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote provider is disabled, unconfigured, or failed its startup probe
    #[error("provider unavailable")]
    ProviderUnavailable,

    /// A single remote provider call failed
    #[error("provider call failed: {0}")]
    ProviderCall(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// A built-in pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new provider call error
    pub fn provider_call(msg: impl Into<String>) -> Self {
        Self::ProviderCall(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new pattern error
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    /// Whether this error came from the provider layer and should trigger a local fallback
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::ProviderUnavailable | Self::ProviderCall(_))
    }
}
