use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::core::automod::{AutomodError, WordStore};

/// JSON file store for the banned-word list: a pretty-printed array of
/// lowercase strings.
pub struct JsonWordStore {
    path: PathBuf,
}

impl JsonWordStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WordStore for JsonWordStore {
    async fn load(&self) -> Result<Vec<String>, AutomodError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| AutomodError::Storage(e.to_string()))?;

        let value: Value =
            serde_json::from_str(&text).map_err(|e| AutomodError::Malformed(e.to_string()))?;

        match value {
            Value::Array(items) => Ok(items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.to_lowercase()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect()),
            _ => Err(AutomodError::Malformed(
                "expected a JSON array of words".to_string(),
            )),
        }
    }

    async fn save(&self, words: &[String]) -> Result<(), AutomodError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AutomodError::Storage(e.to_string()))?;
        }

        let text =
            serde_json::to_string_pretty(words).map_err(|e| AutomodError::Storage(e.to_string()))?;
        fs::write(&self.path, text)
            .await
            .map_err(|e| AutomodError::Storage(e.to_string()))
    }
}
