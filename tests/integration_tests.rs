//! Integration tests for tf_summarize

use tf_summarize::*;

/// Sample text for testing
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that gives systems the ability to learn from experience. Machine learning focuses on computer programs that can access data and learn from it.

The process of learning begins with observations or data, such as examples or direct experience. The aim is to let computers learn automatically without human intervention.

Deep learning is a subset of machine learning that uses artificial neural networks. Neural networks learn representations of data with many layers.
"#;

const PETS: &str = "Cats are great pets. Dogs are loyal companions. \
                    Cats sleep most of the day. Dogs love to play fetch.";

#[test]
fn test_full_pipeline() {
    let summary = summarize(SAMPLE_TEXT, 3).unwrap();

    assert_eq!(summary.len(), 3);
    assert_eq!(summary.total_sentences, 6);
    assert!(!summary.is_full_text);
    assert_eq!(summary.ranked.len(), 3);

    // Sentences should be in document order
    for i in 1..summary.sentences.len() {
        assert!(summary.sentences[i].index > summary.sentences[i - 1].index);
    }

    // Ranked entries are best first
    for i in 1..summary.ranked.len() {
        assert!(summary.ranked[i - 1].score >= summary.ranked[i].score);
    }

    // The summary text is the selected sentences joined by single spaces
    let joined: Vec<&str> = summary.sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(summary.text, joined.join(" "));
}

#[test]
fn test_pets_scenario() {
    let summary = summarize(PETS, 2).unwrap();

    assert_eq!(summary.text, "Cats are great pets. Dogs love to play fetch.");
    for sentence in &summary.sentences {
        let lower = sentence.text.to_lowercase();
        assert!(lower.contains("cats") || lower.contains("dogs"));
    }
}

#[test]
fn test_empty_vocabulary_message() {
    assert_eq!(
        summarize_text("The, and. Of — the.", 2),
        "Error: No valid words found in text."
    );
    assert_eq!(
        summarize("The, and. Of — the.", 2).unwrap_err(),
        SummarizeError::EmptyVocabulary
    );
}

#[test]
fn test_graceful_degradation() {
    let text = "Compilers translate source code. Linkers combine object files.";
    let summary = summarize(text, 5).unwrap();

    assert!(summary.is_full_text);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary.text, text);
    assert_eq!(summarize_text(text, 5), text);
}

#[test]
fn test_hard_wrapped_paragraph() {
    // learning weighs 1.0, every other content word 0.5: both sentences
    // score 4.0 and the earlier one wins.
    let text = "Machine learning is a subset of artificial\nintelligence that learns from data. Deep learning\nuses neural networks with many layers.";
    let summary = summarize(text, 1).unwrap();

    assert_eq!(summary.total_sentences, 2);
    assert_eq!(
        summary.text,
        "Machine learning is a subset of artificial\nintelligence that learns from data."
    );
}

#[test]
fn test_line_per_sentence_input() {
    let text = "Rust guarantees memory safety.\nRust has zero cost abstractions.\nPython is slow.";
    let summary = summarize(text, 2).unwrap();

    assert_eq!(summary.total_sentences, 3);
    assert_eq!(
        summary.text,
        "Rust guarantees memory safety. Rust has zero cost abstractions."
    );
}

const DUPLICATES: &str = "Rust is fast. Go is simple. Rust is fast. Python is popular.";

#[test]
fn test_duplicates_distinct_policy() {
    // rust/fast weigh 1.0; each occurrence of "Rust is fast." scores 2.0
    let summary = summarize(DUPLICATES, 2).unwrap();

    assert_eq!(summary.text, "Rust is fast. Rust is fast.");
    let indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn test_duplicates_merge_policy() {
    let config = SummarizerConfig::default().with_duplicate_policy(DuplicatePolicy::MergeByText);
    let summarizer = Summarizer::with_config(config).unwrap();

    // One merged entry (score 4.0), selected once, emitted at every occurrence
    let summary = summarizer.summarize(DUPLICATES, 1).unwrap();
    assert_eq!(summary.ranked.len(), 1);
    assert!((summary.ranked[0].score - 4.0).abs() < 1e-12);
    assert_eq!(summary.text, "Rust is fast. Rust is fast.");

    // The second slot goes to the earliest of the tied 1.0 sentences
    let summary = summarizer.summarize(DUPLICATES, 2).unwrap();
    assert_eq!(summary.text, "Rust is fast. Go is simple. Rust is fast.");
}

#[test]
fn test_german_stopwords() {
    let text = "Der Hund spielt im Garten. Die Katze schläft. Der Hund bellt laut.";
    let config = SummarizerConfig::default().with_language("de");
    let summarizer = Summarizer::with_config(config).unwrap();
    let summary = summarizer.summarize(text, 1).unwrap();

    // hund weighs 1.0; the first and last sentences tie and the earlier wins
    assert_eq!(summary.len(), 1);
    assert_eq!(summary.text, "Der Hund spielt im Garten.");
}

/// A segmenter treating every line as a sentence and whitespace as the
/// only word separator.
struct LineSegmenter;

impl TextSegmenter for LineSegmenter {
    fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut offset = 0;
        for line in text.split('\n') {
            if !line.trim().is_empty() {
                let index = sentences.len();
                sentences.push(Sentence::new(line.trim(), offset, offset + line.len(), index));
            }
            offset += line.len() + 1;
        }
        sentences
    }

    fn split_words(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|w| !w.is_empty())
            .collect()
    }
}

#[test]
fn test_custom_segmenter() {
    let text = "kernel schedules threads\nkernel manages memory. kernel handles interrupts\nuser space runs apps";
    let summarizer = Summarizer::with_segmenter(SummarizerConfig::default(), LineSegmenter).unwrap();
    let summary = summarizer.summarize(text, 1).unwrap();

    assert_eq!(summary.total_sentences, 3);
    assert_eq!(summary.text, "kernel manages memory. kernel handles interrupts");
}

#[test]
fn test_custom_stopword_list() {
    let summarizer = Summarizer::new().with_stopwords(StopwordFilter::from_list(&["cats", "dogs"]));
    let summary = summarizer.summarize(PETS, 4).unwrap();
    assert!(summary.is_full_text);

    // Only cats/dogs are ignored, so "are" weighs 1.0 and the five-word
    // "sleep most of the day" sentence scores highest (2.5).
    let summary = summarizer.summarize(PETS, 2).unwrap();
    assert_eq!(
        summary.text,
        "Cats are great pets. Cats sleep most of the day."
    );
}

#[test]
fn test_summary_serializes() {
    let summary = summarize(PETS, 2).unwrap();
    let json = serde_json::to_string(&summary).unwrap();
    let back: Summary = serde_json::from_str(&json).unwrap();

    assert_eq!(back, summary);
}

#[test]
fn test_summarizer_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Summarizer>();

    let summarizer = std::sync::Arc::new(Summarizer::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let summarizer = summarizer.clone();
            std::thread::spawn(move || summarizer.summarize(PETS, 2).unwrap().text)
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            "Cats are great pets. Dogs love to play fetch."
        );
    }
}
