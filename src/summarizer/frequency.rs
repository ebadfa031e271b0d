//! Normalized term frequencies
//!
//! Counts every content token in the document and divides by the largest
//! count, so the most frequent word weighs exactly 1.0.

use crate::errors::{Result, SummarizeError};
use crate::nlp::punctuation::PunctuationFilter;
use crate::nlp::stopwords::StopwordFilter;
use rustc_hash::FxHashMap;

/// Token -> normalized importance in (0, 1]
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyMap {
    weights: FxHashMap<String, f64>,
    max_count: usize,
}

impl WordFrequencyMap {
    /// Weight of a token, if it is part of the vocabulary
    #[inline]
    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    /// Check if a token is part of the vocabulary
    pub fn contains(&self, token: &str) -> bool {
        self.weights.contains_key(token)
    }

    /// Raw count of the most frequent token
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(token, weight)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(token, &weight)| (token.as_str(), weight))
    }
}

/// Builds a [`WordFrequencyMap`] from a token stream
#[derive(Debug, Clone, Copy)]
pub struct FrequencyModel<'a> {
    stopwords: &'a StopwordFilter,
    punctuation: &'a PunctuationFilter,
}

impl<'a> FrequencyModel<'a> {
    /// Create a model that skips the given stopwords and punctuation
    pub fn new(stopwords: &'a StopwordFilter, punctuation: &'a PunctuationFilter) -> Self {
        Self {
            stopwords,
            punctuation,
        }
    }

    /// Check if a lowercase token counts toward frequencies
    #[inline]
    pub fn is_content_token(&self, token: &str) -> bool {
        !self.stopwords.is_stopword(token) && !self.punctuation.is_punctuation(token)
    }

    /// Count the raw occurrences of every content token
    pub fn count<I, S>(&self, tokens: I) -> FxHashMap<String, usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in tokens {
            let token = token.as_ref();
            if !self.is_content_token(token) {
                continue;
            }
            if let Some(count) = counts.get_mut(token) {
                *count += 1;
            } else {
                counts.insert(token.to_string(), 1);
            }
        }
        counts
    }

    /// Build the normalized frequency map
    ///
    /// Fails with [`SummarizeError::EmptyVocabulary`] when every token is a
    /// stopword or punctuation.
    pub fn build<I, S>(&self, tokens: I) -> Result<WordFrequencyMap>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let counts = self.count(tokens);
        let max_count = match counts.values().max() {
            Some(&max) => max,
            None => return Err(SummarizeError::EmptyVocabulary),
        };

        let max = max_count as f64;
        let weights = counts
            .into_iter()
            .map(|(token, count)| (token, count as f64 / max))
            .collect();

        Ok(WordFrequencyMap { weights, max_count })
    }
}
