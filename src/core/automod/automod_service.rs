// Automod service - core business logic for banned-word filtering.
//
// This service handles:
// - Evaluating messages against the banned-term list (three tiers)
// - Adding/removing/listing banned terms
// - Flushing the list to the word store after every change
//
// NO Discord dependencies here - just pure domain logic.

use super::automod_models::{AutomodConfig, MatchVerdict};
use super::matcher::check_term;
use super::normalizer::normalize;
use super::pattern_cache::PatternCache;
use super::term_store::{canonicalize, TermSet, WordStore};
use parking_lot::RwLock;
use tokio::sync::Mutex;

/// Banned-word filter shared between the message handler and the
/// `/automod` commands.
///
/// Reads take a shared lock on the term set for the whole scan, writes take
/// it exclusively, so an evaluation sees either the old list or the new one.
/// Flushes are serialized separately so the file always ends up holding the
/// latest list.
pub struct AutomodService<S: WordStore> {
    store: S,
    terms: RwLock<TermSet>,
    patterns: PatternCache,
    config: AutomodConfig,
    flush_lock: Mutex<()>,
}

impl<S: WordStore> AutomodService<S> {
    /// Create a service with an empty term list.
    #[allow(dead_code)]
    pub fn new(store: S, config: AutomodConfig) -> Self {
        Self::with_terms(store, config, TermSet::default())
    }

    fn with_terms(store: S, config: AutomodConfig, terms: TermSet) -> Self {
        Self {
            store,
            terms: RwLock::new(terms),
            patterns: PatternCache::new(),
            config,
            flush_lock: Mutex::new(()),
        }
    }

    /// Create a service seeded from the word store.
    ///
    /// A missing, unreadable or malformed list means an empty one.
    pub async fn load(store: S, config: AutomodConfig) -> Self {
        let terms = match store.load().await {
            Ok(words) => {
                let terms = TermSet::from_words(words);
                tracing::info!(count = terms.len(), "Loaded automod word list");
                terms
            }
            Err(e) => {
                tracing::warn!("Automod word list not found or invalid, starting empty: {}", e);
                TermSet::default()
            }
        };

        Self::with_terms(store, config, terms)
    }

    /// Check a message against every banned term.
    ///
    /// Terms are tried in list order; for each term the direct, spaced and
    /// fuzzy tiers run in turn. The first hit is returned.
    pub fn evaluate(&self, message: &str) -> MatchVerdict {
        let text = normalize(message);
        let terms = self.terms.read();

        for term in terms.iter() {
            let compiled = self.patterns.get_or_build(term);
            if let Some(verdict) = check_term(term, &compiled, &text, &self.config) {
                tracing::debug!(term = %term, tier = ?verdict.tier(), "Automod match");
                return verdict;
            }
        }

        MatchVerdict::Clean
    }

    /// Add one term. Returns false if it was blank, had no letters or digits,
    /// or was already listed.
    #[allow(dead_code)]
    pub async fn add(&self, term: &str) -> bool {
        !self.add_many(&[term]).await.is_empty()
    }

    /// Remove one term. Returns false if it wasn't listed.
    #[allow(dead_code)]
    pub async fn remove(&self, term: &str) -> bool {
        !self.remove_many(&[term]).await.is_empty()
    }

    /// Add a batch of terms, flushing once. Returns the canonical forms that
    /// were actually new.
    pub async fn add_many<T: AsRef<str> + Sync>(&self, words: &[T]) -> Vec<String> {
        let _flush = self.flush_lock.lock().await;

        let (added, snapshot) = {
            let mut terms = self.terms.write();
            let mut added = Vec::new();
            for term in words.iter().filter_map(|w| canonicalize(w.as_ref())) {
                if terms.insert(term.clone()) {
                    added.push(term);
                }
            }
            (added, terms.to_vec())
        };

        if !added.is_empty() {
            tracing::info!(terms = ?added, "Added automod terms");
            self.flush(&snapshot).await;
        }

        added
    }

    /// Remove a batch of terms, flushing once. Returns the canonical forms
    /// that were actually removed.
    pub async fn remove_many<T: AsRef<str> + Sync>(&self, words: &[T]) -> Vec<String> {
        let _flush = self.flush_lock.lock().await;

        let (removed, snapshot) = {
            let mut terms = self.terms.write();
            let mut removed = Vec::new();
            for term in words.iter().filter_map(|w| canonicalize(w.as_ref())) {
                if terms.remove(&term) {
                    // Evict under the write lock so no reader can rebuild it
                    self.patterns.evict(&term);
                    removed.push(term);
                }
            }
            (removed, terms.to_vec())
        };

        if !removed.is_empty() {
            tracing::info!(terms = ?removed, "Removed automod terms");
            self.flush(&snapshot).await;
        }

        removed
    }

    /// Every banned term, sorted.
    pub fn list(&self) -> Vec<String> {
        self.terms.read().to_vec()
    }

    #[allow(dead_code)]
    pub fn contains(&self, term: &str) -> bool {
        canonicalize(term).is_some_and(|t| self.terms.read().contains(&t))
    }

    pub fn config(&self) -> &AutomodConfig {
        &self.config
    }

    /// Write the list out. Failures are logged; memory stays authoritative.
    async fn flush(&self, words: &[String]) {
        if let Err(e) = self.store.save(words).await {
            tracing::error!("Failed to save automod word list: {}", e);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
