//! Error types for rapid_sumbasic

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SumBasicError>;

/// Errors produced while configuring or running the summarizer
#[derive(Debug, Error)]
pub enum SumBasicError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sentences count could not be parsed or is out of range
    #[error("invalid sentences count: {0}")]
    InvalidCount(String),

    /// The document has sentences but no word outside the stopwords
    #[error("word distribution exhausted with {remaining} sentence(s) still unranked")]
    DistributionExhausted { remaining: usize },

    /// Configuration JSON could not be decoded
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl SumBasicError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SumBasicError::InvalidConfig(message.into())
    }

    pub fn invalid_count(message: impl Into<String>) -> Self {
        SumBasicError::InvalidCount(message.into())
    }
}
