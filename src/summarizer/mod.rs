//! Summarization components
//!
//! Provides extractive summarization by normalized term frequency:
//! a frequency model, a sentence scorer, a bounded top-K selector, and the
//! [`Summarizer`] that ties them together.

pub mod extractive;
pub mod frequency;
pub mod scorer;
pub mod selector;

pub use extractive::{summarize, summarize_text, Summarizer, Summary};
