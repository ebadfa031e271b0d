//! Language resource initialization
//!
//! Stopword lists are loaded once per language and shared read-only for the
//! rest of the process. [`ensure_ready`] is idempotent: the first call for a
//! language loads the list, later calls return the cached copy. Aliases and
//! unknown codes share the entry of the list they resolve to.

use super::stopwords::StopwordFilter;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, OnceLock};

static STOPWORDS: OnceLock<Mutex<FxHashMap<&'static str, Arc<StopwordFilter>>>> = OnceLock::new();

/// Make sure the stopword list for `language` is loaded and return it
pub fn ensure_ready(language: &str) -> Arc<StopwordFilter> {
    let key = StopwordFilter::resolve_language(language);
    let cache = STOPWORDS.get_or_init(|| Mutex::new(FxHashMap::default()));
    // A poisoned lock only means another thread panicked mid-insert; the
    // map itself is still valid.
    let mut cache = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    cache
        .entry(key)
        .or_insert_with_key(|&language| {
            let filter = StopwordFilter::new(language);
            tracing::debug!(language, stopwords = filter.len(), "loaded stopword list");
            Arc::new(filter)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_ready_is_idempotent() {
        let first = ensure_ready("en");
        let second = ensure_ready("EN ");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.is_stopword("the"));
    }

    #[test]
    fn test_aliases_share_one_entry() {
        let code = ensure_ready("en");
        let name = ensure_ready("english");
        let unknown = ensure_ready("xx-unknown");

        assert!(Arc::ptr_eq(&code, &name));
        assert!(Arc::ptr_eq(&code, &unknown));
    }

    #[test]
    fn test_languages_are_cached_separately() {
        let english = ensure_ready("en");
        let german = ensure_ready("de");

        assert!(!Arc::ptr_eq(&english, &german));
        assert!(german.is_stopword("und"));
    }
}
