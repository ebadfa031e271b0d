//! Sentence scoring
//!
//! A sentence's score is the sum of the normalized frequencies of its words.
//! Sentences with no vocabulary words get no entry at all.

use super::frequency::WordFrequencyMap;
use crate::nlp::tokenizer::TextSegmenter;
use crate::types::{DuplicatePolicy, ScoredSentence, Sentence};
use rustc_hash::FxHashMap;

/// Scores of every sentence that contains at least one vocabulary word,
/// in order of first occurrence.
#[derive(Debug, Clone, Default)]
pub struct SentenceScoreMap {
    entries: Vec<ScoredSentence>,
    policy: DuplicatePolicy,
}

impl SentenceScoreMap {
    /// Scored entries in order of first occurrence
    pub fn entries(&self) -> &[ScoredSentence] {
        &self.entries
    }

    /// The policy the map was built with
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Score of a sentence; 0 when it has no entry
    pub fn score_of(&self, sentence: &Sentence) -> f64 {
        let found = match self.policy {
            DuplicatePolicy::Distinct => self
                .entries
                .binary_search_by_key(&sentence.index, |e| e.index)
                .ok()
                .map(|pos| &self.entries[pos]),
            DuplicatePolicy::MergeByText => self.entries.iter().find(|e| e.text == sentence.text),
        };
        found.map_or(0.0, |e| e.score)
    }

    /// Number of scored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no sentence was scored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scores sentences against a frequency map
#[derive(Debug)]
pub struct SentenceScorer<'a, T: TextSegmenter> {
    segmenter: &'a T,
    frequencies: &'a WordFrequencyMap,
    policy: DuplicatePolicy,
}

impl<'a, T: TextSegmenter> SentenceScorer<'a, T> {
    /// Create a scorer using position-keyed entries
    pub fn new(segmenter: &'a T, frequencies: &'a WordFrequencyMap) -> Self {
        Self {
            segmenter,
            frequencies,
            policy: DuplicatePolicy::Distinct,
        }
    }

    /// Set the duplicate sentence policy
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Score one sentence; `None` when none of its words are in the vocabulary
    pub fn score_sentence(&self, sentence: &Sentence) -> Option<f64> {
        self.segmenter
            .split_words(&sentence.text)
            .iter()
            .filter_map(|word| self.frequencies.get(word))
            .fold(None, |acc, weight| Some(acc.unwrap_or(0.0) + weight))
    }

    /// Score all sentences
    pub fn score(&self, sentences: &[Sentence]) -> SentenceScoreMap {
        let mut entries: Vec<ScoredSentence> = Vec::new();
        // Text -> entry position, only used when merging duplicates
        let mut by_text: FxHashMap<&str, usize> = FxHashMap::default();

        for sentence in sentences {
            let Some(score) = self.score_sentence(sentence) else {
                continue;
            };

            if self.policy.merges() {
                if let Some(&pos) = by_text.get(sentence.text.as_str()) {
                    entries[pos].score += score;
                    continue;
                }
                by_text.insert(sentence.text.as_str(), entries.len());
            }

            entries.push(ScoredSentence {
                index: sentence.index,
                text: sentence.text.clone(),
                score,
            });
        }

        SentenceScoreMap {
            entries,
            policy: self.policy,
        }
    }
}
