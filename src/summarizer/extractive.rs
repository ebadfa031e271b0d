//! Term-frequency extractive summarization
//!
//! [`Summarizer`] wires the stages together:
//!
//! 1. split the whole text into lowercase words and build the
//!    [`WordFrequencyMap`](super::frequency::WordFrequencyMap)
//! 2. split the text into sentences
//! 3. return everything when the request covers every sentence
//! 4. otherwise score sentences and keep the top N
//! 5. reassemble the kept sentences in document order

use super::frequency::FrequencyModel;
use super::scorer::SentenceScorer;
use super::selector::TopKSelector;
use crate::errors::{Result, SummarizeError};
use crate::nlp::punctuation::PunctuationFilter;
use crate::nlp::resources;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{TextSegmenter, Tokenizer};
use crate::types::{DuplicatePolicy, ScoredSentence, Sentence, SummarizerConfig};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The result of summarizing one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined with single spaces
    pub text: String,
    /// Selected sentences in document order
    pub sentences: Vec<Sentence>,
    /// Selected entries with their scores, best first (empty for full text)
    pub ranked: Vec<ScoredSentence>,
    /// Number of sentences in the source text
    pub total_sentences: usize,
    /// Whether the whole text was returned because the request covered it
    pub is_full_text: bool,
}

impl Summary {
    fn assemble(
        sentences: Vec<Sentence>,
        ranked: Vec<ScoredSentence>,
        total_sentences: usize,
        is_full_text: bool,
    ) -> Self {
        let text = sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();

        Self {
            text,
            sentences,
            ranked,
            total_sentences,
            is_full_text,
        }
    }

    /// Number of sentences in the summary
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the summary has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The summary text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Extractive summarizer scoring sentences by normalized term frequency
///
/// Immutable after construction; one instance can serve any number of
/// calls, from any number of threads.
#[derive(Debug, Clone)]
pub struct Summarizer<T: TextSegmenter = Tokenizer> {
    config: SummarizerConfig,
    segmenter: T,
    stopwords: Arc<StopwordFilter>,
    punctuation: PunctuationFilter,
}

impl Default for Summarizer<Tokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer<Tokenizer> {
    /// Create an English summarizer with default settings
    pub fn new() -> Self {
        let config = SummarizerConfig::default();
        let stopwords = resources::ensure_ready(&config.language);
        Self {
            config,
            segmenter: Tokenizer::new(),
            stopwords,
            punctuation: PunctuationFilter::new(),
        }
    }

    /// Create a summarizer from a validated config
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new().with_min_length(config.min_token_length);
        Summarizer::with_segmenter(config, tokenizer)
    }
}

impl<T: TextSegmenter> Summarizer<T> {
    /// Create a summarizer with a custom text segmenter
    pub fn with_segmenter(config: SummarizerConfig, segmenter: T) -> Result<Self> {
        config.validate()?;

        let mut stopwords = resources::ensure_ready(&config.language);
        if !config.stopwords.is_empty() {
            let mut extended = (*stopwords).clone();
            extended.add_stopwords(config.stopwords.as_slice());
            stopwords = Arc::new(extended);
        }

        Ok(Self {
            config,
            segmenter,
            stopwords,
            punctuation: PunctuationFilter::new(),
        })
    }

    /// Replace the stopword list
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = Arc::new(stopwords);
        self
    }

    /// Replace the punctuation classifier
    pub fn with_punctuation(mut self, punctuation: PunctuationFilter) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize using the configured sentence count
    pub fn run(&self, text: &str) -> Result<Summary> {
        self.summarize(text, self.config.num_sentences)
    }

    /// Summarize `text` down to `num_sentences` sentences
    pub fn summarize(&self, text: &str, num_sentences: usize) -> Result<Summary> {
        let _span = tracing::info_span!("summarize", num_sentences).entered();

        if num_sentences == 0 {
            return Err(SummarizeError::invalid_count(num_sentences));
        }

        let model = FrequencyModel::new(&self.stopwords, &self.punctuation);
        let frequencies = model.build(self.segmenter.split_words(text))?;
        tracing::debug!(
            vocabulary = frequencies.len(),
            max_count = frequencies.max_count(),
            "built frequency model"
        );

        let sentences = self.segmenter.split_sentences(text);
        let total = sentences.len();

        if num_sentences >= total {
            tracing::warn!(
                requested = num_sentences,
                available = total,
                "Requested {} sentences, but text only has {}. Returning full text.",
                num_sentences,
                total
            );
            return Ok(Summary::assemble(sentences, Vec::new(), total, true));
        }

        let scores = SentenceScorer::new(&self.segmenter, &frequencies)
            .with_policy(self.config.duplicate_policy)
            .score(&sentences);
        tracing::debug!(scored = scores.len(), total, "scored sentences");

        let ranked: Vec<ScoredSentence> = TopKSelector::new(num_sentences)
            .select(scores.entries())
            .into_iter()
            .cloned()
            .collect();

        let selected: Vec<Sentence> = match self.config.duplicate_policy {
            DuplicatePolicy::Distinct => {
                let keep: FxHashSet<usize> = ranked.iter().map(|r| r.index).collect();
                sentences
                    .into_iter()
                    .filter(|s| keep.contains(&s.index))
                    .collect()
            }
            DuplicatePolicy::MergeByText => {
                let keep: FxHashSet<&str> = ranked.iter().map(|r| r.text.as_str()).collect();
                sentences
                    .iter()
                    .filter(|s| keep.contains(s.text.as_str()))
                    .cloned()
                    .collect()
            }
        };

        Ok(Summary::assemble(selected, ranked, total, false))
    }
}

/// Summarize English text with default settings
pub fn summarize(text: &str, num_sentences: usize) -> Result<Summary> {
    Summarizer::new().summarize(text, num_sentences)
}

/// Summarize English text, reporting failures as text
///
/// Returns the summary on success and `"Error: <message>"` otherwise.
pub fn summarize_text(text: &str, num_sentences: usize) -> String {
    match summarize(text, num_sentences) {
        Ok(summary) => summary.text,
        Err(err) => err.report(),
    }
}
