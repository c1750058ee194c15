//! Key-value store trait and implementations.

use async_trait::async_trait;
use modelforge_core::{Error, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::debug;

/// Trait for local key-value persistence.
///
/// Values are plain strings, matching the persisted layout the browser
/// client used (`usageCount` as a decimal string, `isSubscribed` as
/// `"true"`). Implementations are injected into the entitlement layer so
/// tests can substitute an in-memory fake.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key, `None` if never set.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Persist a value unconditionally.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Store name for logging.
    fn name(&self) -> &str;
}

/// In-memory store. Default for tests and ephemeral sessions.
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self {
            values: Mutex::new(values),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// File-backed store: a flat JSON object on disk, scoped to the local
/// profile directory.
///
/// Each `get` reads the file and each `set` does a read-modify-write, so
/// state written by another process is visible on the next read. There is
/// no cross-process locking; two writers racing may lose an update, which
/// is an accepted limitation of local-only storage.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                Error::Storage(format!("Failed to parse store file: {}", e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(Error::Storage(format!("Failed to read store file: {}", e))),
        }
    }

    async fn save(&self, values: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(values)
            .map_err(|e| Error::Internal(format!("Failed to encode store file: {}", e)))?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load().await.unwrap_or_default();
        values.insert(key.to_string(), value.to_string());
        self.save(&values).await?;
        debug!(key = key, store = self.name(), "Persisted value");
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("usageCount").await.unwrap(), None);

        store.set("usageCount", "3").await.unwrap();
        assert_eq!(store.get("usageCount").await.unwrap().as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("entitlement.json"));

        assert_eq!(store.get("isSubscribed").await.unwrap(), None);
        store.set("isSubscribed", "true").await.unwrap();
        store.set("usageCount", "1").await.unwrap();

        // A fresh handle over the same file sees both writes.
        let reopened = FileStore::new(dir.path().join("entitlement.json"));
        assert_eq!(
            reopened.get("isSubscribed").await.unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(reopened.get("usageCount").await.unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_file_store_corrupt_content_errors_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entitlement.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("usageCount").await.is_err());
    }
}
