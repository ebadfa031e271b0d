//! Natural Language Processing components
//!
//! This module provides tokenization, stopword filtering, punctuation
//! classification, and language resource initialization.

pub mod punctuation;
pub mod resources;
pub mod stopwords;
pub mod tokenizer;

pub use resources::ensure_ready;
