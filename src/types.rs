//! Core types for tf_summarize
//!
//! This module defines the fundamental data structures used throughout the library,
//! including sentences, scored sentences, and configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// A sentence paired with its accumulated term-frequency score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Sentence index within the document
    pub index: usize,
    /// The sentence text
    pub text: String,
    /// Sum of normalized frequencies of the sentence's words
    pub score: f64,
}

// ============================================================================
// Duplicate Policy
// ============================================================================

/// How sentences with identical text are treated during scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Every occurrence is its own candidate, keyed by position (default)
    #[default]
    Distinct,
    /// Occurrences share one entry keyed by text; scores accumulate into it
    /// and every occurrence is emitted when the entry is selected.
    MergeByText,
}

impl DuplicatePolicy {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "merge" | "merge_by_text" | "text" => DuplicatePolicy::MergeByText,
            _ => DuplicatePolicy::Distinct,
        }
    }

    /// Returns `true` when duplicate sentences are merged
    pub fn merges(self) -> bool {
        matches!(self, DuplicatePolicy::MergeByText)
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DuplicatePolicy::parse(value))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences to keep in the summary
    pub num_sentences: usize,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// How duplicate sentences are treated
    pub duplicate_policy: DuplicatePolicy,
    /// Minimum token length (in chars) counted toward frequencies
    pub min_token_length: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: 3,
            language: "en".to_string(),
            stopwords: Vec::new(),
            duplicate_policy: DuplicatePolicy::Distinct,
            min_token_length: 1,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_sentences == 0 {
            return Err(SummarizeError::invalid_count(self.num_sentences));
        }

        if self.min_token_length == 0 {
            return Err(SummarizeError::invalid_config(
                "min_token_length must be > 0",
            ));
        }

        if self.language.trim().is_empty() {
            return Err(SummarizeError::invalid_config("language must not be empty"));
        }

        Ok(())
    }

    /// Builder method: set number of sentences
    pub fn with_num_sentences(mut self, num_sentences: usize) -> Self {
        self.num_sentences = num_sentences;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set duplicate sentence policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }
}
