// Per-term compiled matchers, built on first use and evicted when the term
// is removed.
//
// Keyed by canonical term. The service only touches this while holding the
// term-set lock (read for lookups, write for eviction), so an entry never
// outlives its term.

use crate::core::automod::normalizer::term_key;
use dashmap::DashMap;
use regex::Regex;
use std::sync::Arc;

/// Everything the tiers need for one term, computed once.
#[derive(Debug)]
pub struct CompiledTerm {
    /// Folded and stripped term, compared against normalized text
    pub key: String,
    /// Spacing-tier pattern; `None` if the key is empty or failed to build
    pub spaced: Option<Regex>,
}

impl CompiledTerm {
    pub fn build(term: &str) -> Self {
        let key = term_key(term);
        let spaced = if key.is_empty() {
            None
        } else {
            match Regex::new(&spacing_pattern(&key)) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(term, "Failed to build spacing pattern: {}", e);
                    None
                }
            }
        };

        Self { key, spaced }
    }

    /// Terms that fold down to nothing can't be matched at all.
    pub fn is_matchable(&self) -> bool {
        !self.key.is_empty()
    }
}

/// Separator class: anything that isn't a letter or digit.
const SEPARATORS: &str = r"[^\p{Alphabetic}\p{N}]*";

/// "bad" -> `(?i)b<sep>a<sep>d<sep>`
fn spacing_pattern(key: &str) -> String {
    let mut pattern = String::from("(?i)");
    for c in key.chars() {
        pattern.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4])));
        pattern.push_str(SEPARATORS);
    }
    pattern
}

/// Lazily populated map from canonical term to its compiled matcher.
#[derive(Default)]
pub struct PatternCache {
    entries: DashMap<String, Arc<CompiledTerm>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the compiled matcher for `term`, building it on first use.
    pub fn get_or_build(&self, term: &str) -> Arc<CompiledTerm> {
        if let Some(entry) = self.entries.get(term) {
            return Arc::clone(entry.value());
        }

        let compiled = Arc::new(CompiledTerm::build(term));
        Arc::clone(
            self.entries
                .entry(term.to_string())
                .or_insert(compiled)
                .value(),
        )
    }

    pub fn evict(&self, term: &str) {
        self.entries.remove(term);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }
}
