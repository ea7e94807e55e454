//! Storage module - async key-value persistence boundary
//!
//! The engine treats persistence as a best-effort mirror of in-memory state:
//! values are JSON strings behind an opaque async key-value contract, and a
//! failing store degrades gameplay to in-memory defaults rather than
//! surfacing errors to the player.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

/// Storage keys. The names match the historical persisted JSON so existing
/// saves keep loading.
pub mod keys {
    pub const PLAYER_SEED: &str = "playerSeed";
    pub const PLAYER_LEVELS: &str = "playerLevels";
    pub const PROGRESS: &str = "puzzleProgress";
    pub const COLLECTION: &str = "@puzzle_collection";
}

/// Async key-value storage contract
pub trait Storage {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn clear(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// In-memory storage; the reference implementation and default test double.
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys (test/diagnostic helper)
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_roundtrip() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("missing").await.unwrap(), None);

        store.set(keys::PLAYER_SEED, "42").await.unwrap();
        assert_eq!(
            store.get(keys::PLAYER_SEED).await.unwrap(),
            Some("42".to_string())
        );

        store.remove(keys::PLAYER_SEED).await.unwrap();
        assert_eq!(store.get(keys::PLAYER_SEED).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_storage_clones_share_state() {
        let store = MemoryStorage::new();
        let alias = store.clone();
        store.set("k", "v").await.unwrap();
        assert_eq!(alias.get("k").await.unwrap(), Some("v".to_string()));

        alias.clear().await.unwrap();
        assert!(store.is_empty().await);
    }
}
