//! # tf_summarize
//!
//! Extractive text summarization by normalized term frequency.
//!
//! Every content word is weighted by its frequency relative to the most
//! frequent word in the document. Sentences are scored by summing the
//! weights of their words, and the top N sentences are returned in their
//! original order.
//!
//! ```
//! let text = "Cats are great pets. Dogs are loyal companions. \
//!             Cats sleep most of the day. Dogs love to play fetch.";
//! let summary = tf_summarize::summarize(text, 2).unwrap();
//! assert_eq!(summary.text, "Cats are great pets. Dogs love to play fetch.");
//! ```
//!
//! ## Features
//!
//! - **Unicode-aware**: UAX #29 word and sentence segmentation
//! - **Pluggable**: bring your own [`TextSegmenter`] or stopword list
//! - **Bounded selection**: top-K via a size-limited heap

pub mod errors;
pub mod interactive;
pub mod nlp;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{DuplicatePolicy, ScoredSentence, Sentence, SummarizerConfig};

// Re-export main functionality
pub use nlp::{
    punctuation::PunctuationFilter,
    stopwords::StopwordFilter,
    tokenizer::{TextSegmenter, Tokenizer},
};
pub use summarizer::frequency::{FrequencyModel, WordFrequencyMap};
pub use summarizer::scorer::{SentenceScoreMap, SentenceScorer};
pub use summarizer::selector::TopKSelector;
pub use summarizer::{summarize, summarize_text, Summarizer, Summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
