// Banned-term set and its persistence port.

use super::normalizer::term_key;
use async_trait::async_trait;
use std::collections::BTreeSet;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum AutomodError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Malformed word list: {0}")]
    Malformed(String),
}

// ============================================================================
// STORAGE TRAIT (PORT)
// ============================================================================

/// Durable home of the banned-word list.
///
/// The stored format is a plain list of lowercase strings. It may contain
/// duplicates; the in-memory set de-duplicates on load.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Read the whole list. A missing list is an empty one, not an error.
    async fn load(&self) -> Result<Vec<String>, AutomodError>;

    /// Replace the stored list with `words`.
    async fn save(&self, words: &[String]) -> Result<(), AutomodError>;
}

// ============================================================================
// TERM SET
// ============================================================================

/// Trim and lowercase an admin-supplied term.
///
/// `None` if nothing is left, or if the term has no letters or digits to
/// match on (e.g. "???").
pub fn canonicalize(term: &str) -> Option<String> {
    let term = term.trim().to_lowercase();
    if term_key(&term).is_empty() {
        None
    } else {
        Some(term)
    }
}

/// In-memory set of canonical banned terms.
///
/// Iterates in lexicographic order, which is also the order the matcher
/// tries terms in.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    terms: BTreeSet<String>,
}

impl TermSet {
    /// Build from persisted words, canonicalizing and dropping blanks.
    pub fn from_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let terms = words
            .into_iter()
            .filter_map(|w| canonicalize(w.as_ref()))
            .collect();
        Self { terms }
    }

    /// Insert an already-canonical term. Returns false if it was present.
    pub fn insert(&mut self, term: String) -> bool {
        self.terms.insert(term)
    }

    /// Remove an already-canonical term. Returns false if it was absent.
    pub fn remove(&mut self, term: &str) -> bool {
        self.terms.remove(term)
    }

    #[allow(dead_code)]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sorted copy, used for display and for flushing to the store.
    pub fn to_vec(&self) -> Vec<String> {
        self.terms.iter().cloned().collect()
    }
}
