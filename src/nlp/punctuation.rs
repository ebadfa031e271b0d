//! Punctuation classification
//!
//! Tokenizers emit punctuation as separate tokens; these must never count
//! toward word frequencies.

use rustc_hash::FxHashSet;

/// ASCII punctuation symbols
const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Classifies tokens as punctuation
#[derive(Debug, Clone)]
pub struct PunctuationFilter {
    symbols: FxHashSet<char>,
    /// Treat any token without alphanumeric characters as punctuation
    unicode_fallback: bool,
}

impl Default for PunctuationFilter {
    fn default() -> Self {
        Self {
            symbols: ASCII_PUNCTUATION.chars().collect(),
            unicode_fallback: true,
        }
    }
}

impl PunctuationFilter {
    /// Create the default filter (ASCII symbols plus any non-alphanumeric token)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a strict filter that only recognizes the given symbols
    pub fn from_symbols(symbols: &str) -> Self {
        Self {
            symbols: symbols.chars().collect(),
            unicode_fallback: false,
        }
    }

    /// Check if a token is punctuation
    pub fn is_punctuation(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        if token.chars().all(|c| self.symbols.contains(&c)) {
            return true;
        }
        self.unicode_fallback && !token.chars().any(char::is_alphanumeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_punctuation() {
        let filter = PunctuationFilter::new();

        assert!(filter.is_punctuation("."));
        assert!(filter.is_punctuation(","));
        assert!(filter.is_punctuation("..."));
        assert!(filter.is_punctuation("?!"));
        assert!(!filter.is_punctuation("cats"));
        assert!(!filter.is_punctuation("don't"));
        assert!(!filter.is_punctuation(""));
    }

    #[test]
    fn test_unicode_punctuation() {
        let filter = PunctuationFilter::new();

        assert!(filter.is_punctuation("—"));
        assert!(filter.is_punctuation("«"));
        assert!(filter.is_punctuation("…"));
        assert!(!filter.is_punctuation("日本"));
    }

    #[test]
    fn test_strict_symbols() {
        let filter = PunctuationFilter::from_symbols(".,");

        assert!(filter.is_punctuation("."));
        assert!(!filter.is_punctuation("—"));
        assert!(!filter.is_punctuation("!"));
    }
}
