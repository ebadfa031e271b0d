//! Error types for tf_summarize
//!
//! This module defines the error types used throughout the library.
//! Degraded-but-valid outcomes (asking for more sentences than the text
//! has) are not errors; see [`crate::Summary::is_full_text`].

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Main error type for tf_summarize
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    /// Every token of the input was a stopword or punctuation
    #[error("No valid words found in text.")]
    EmptyVocabulary,

    /// The requested sentence count is not a positive integer
    #[error("Invalid sentence count: {count} (must be at least 1)")]
    InvalidCount { count: usize },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Reading interactive input failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl SummarizeError {
    /// Create an invalid count error
    pub fn invalid_count(count: usize) -> Self {
        Self::InvalidCount { count }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if the input text had no scorable words
    pub fn is_empty_vocabulary(&self) -> bool {
        matches!(self, Self::EmptyVocabulary)
    }

    /// Render the error the way it is reported to end users
    pub fn report(&self) -> String {
        format!("Error: {}", self)
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for SummarizeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}
