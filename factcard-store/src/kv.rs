//! Key-value persistence.
//!
//! The quota counter only ever needs two string keys. Every call goes to
//! the backing store; nothing is cached between calls.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::StoreError;
use crate::persistence::{load_json, save_json};

/// String key/value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads a value.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes a value. Missing keys are not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// JSON File Store
// ============================================================================

/// A flat JSON object on disk, re-read on every access.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match load_json(&self.path).await {
            Ok(map) => Ok(map),
            Err(e) if e.is_not_found() => Ok(BTreeMap::new()),
            Err(StoreError::Serialization(e)) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt state file, starting fresh");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        save_json(&self.path, &map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            save_json(&self.path, &map).await?;
        }
        Ok(())
    }
}

// ============================================================================
// Memory Store
// ============================================================================

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
