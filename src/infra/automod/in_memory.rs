// In-memory WordStore, used by the core tests. Clones share the same list so
// a test can keep a handle and look at what the service flushed.

use crate::core::automod::{AutomodError, WordStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryWordStore {
    words: Arc<RwLock<Vec<String>>>,
}

impl InMemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            words: Arc::new(RwLock::new(words.into_iter().map(Into::into).collect())),
        }
    }

    /// What was last saved.
    pub async fn snapshot(&self) -> Vec<String> {
        self.words.read().await.clone()
    }

    pub async fn set_words(&self, words: Vec<String>) {
        *self.words.write().await = words;
    }
}

#[async_trait]
impl WordStore for InMemoryWordStore {
    async fn load(&self) -> Result<Vec<String>, AutomodError> {
        Ok(self.words.read().await.clone())
    }

    async fn save(&self, words: &[String]) -> Result<(), AutomodError> {
        *self.words.write().await = words.to_vec();
        Ok(())
    }
}
