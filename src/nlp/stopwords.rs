//! Stopword filtering
//!
//! This module provides stopword filtering using the NLTK lists shipped by
//! the `stop-words` crate, with support for custom stopword lists.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru.
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(Self::resolve_language(language)),
        }
    }

    /// Canonical code of the list used for `language`
    pub fn resolve_language(language: &str) -> &'static str {
        match language.trim().to_lowercase().as_str() {
            "de" | "german" => "de",
            "fr" | "french" => "fr",
            "es" | "spanish" => "es",
            "it" | "italian" => "it",
            "pt" | "portuguese" => "pt",
            "nl" | "dutch" => "nl",
            "ru" | "russian" => "ru",
            // Default to English for unknown languages
            _ => "en",
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a lowercase token is a stopword
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Load stopwords for a canonical language code
    fn load_stopwords(code: &str) -> FxHashSet<String> {
        let lang = match code {
            "de" => LANGUAGE::German,
            "fr" => LANGUAGE::French,
            "es" => LANGUAGE::Spanish,
            "it" => LANGUAGE::Italian,
            "pt" => LANGUAGE::Portuguese,
            "nl" => LANGUAGE::Dutch,
            "ru" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
