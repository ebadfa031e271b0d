//! Unicode-aware tokenization
//!
//! This module provides UAX #29 compliant word and sentence segmentation.
//! The summarizer only talks to the [`TextSegmenter`] trait, so a different
//! segmenter can be plugged in without touching the scoring code.

use crate::types::Sentence;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences and lowercase word tokens.
///
/// # Contract
///
/// - `split_sentences` returns sentences in document order with `index`
///   equal to their position.
/// - `split_words` returns lowercase tokens in text order. Punctuation
///   tokens may be included; the frequency model filters them out.
/// - Both are deterministic.
pub trait TextSegmenter {
    /// Split text into an ordered sequence of sentences
    fn split_sentences(&self, text: &str) -> Vec<Sentence>;

    /// Split text into an ordered sequence of lowercase tokens
    fn split_words(&self, text: &str) -> Vec<String>;
}

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum word length (in chars) to emit
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length.max(1);
        self
    }

    /// Replace single line breaks with spaces, keeping blank lines.
    ///
    /// UAX #29 ends a sentence at every line break, which cuts hard-wrapped
    /// paragraphs apart. Only ASCII `\n`/`\r` are replaced (by `' '`), so the
    /// result has the same byte offsets as the input.
    fn unwrap_soft_breaks(text: &str) -> Cow<'_, str> {
        if !text.contains(['\n', '\r']) {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut run = String::new();
        for c in text.chars() {
            if c.is_whitespace() {
                run.push(c);
                continue;
            }
            Self::flush_whitespace(&mut out, &mut run);
            out.push(c);
        }
        Self::flush_whitespace(&mut out, &mut run);

        Cow::Owned(out)
    }

    /// Emit a whitespace run; a run holding exactly one line break is a soft wrap
    fn flush_whitespace(out: &mut String, run: &mut String) {
        let breaks = run.matches('\n').count() + run.matches('\r').count()
            - run.matches("\r\n").count();
        if breaks == 1 {
            out.extend(run.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
        } else {
            out.push_str(run);
        }
        run.clear();
    }

    /// Find sentence boundaries in text
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut boundaries = Vec::new();
        let mut start = 0;
        let text = Self::unwrap_soft_breaks(text);
        let text = text.as_ref();

        for (idx, _) in text.split_sentence_bound_indices() {
            if idx > start {
                let segment = &text[start..idx];
                // Skip empty segments
                if !segment.trim().is_empty() {
                    boundaries.push((start, idx));
                }
            }
            start = idx;
        }

        // Handle last segment
        if start < text.len() {
            let segment = &text[start..];
            if !segment.trim().is_empty() {
                boundaries.push((start, text.len()));
            }
        }

        boundaries
    }

    fn is_word(token: &str) -> bool {
        token.chars().any(|c| c.is_alphanumeric())
    }
}

impl TextSegmenter for Tokenizer {
    fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        self.sentence_boundaries(text)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| Sentence::new(text[start..end].trim(), start, end, index))
            .collect()
    }

    fn split_words(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();

        lower
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .filter(|segment| {
                !Self::is_word(segment) || segment.chars().count() >= self.min_token_length
            })
            .map(str::to_string)
            .collect()
    }
}
