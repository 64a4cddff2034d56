//! In-memory collection store backed by dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, info};

use residency_core::result::AppResult;
use residency_core::traits::store::CollectionStore;

use crate::check_collection_name;
use crate::seed::SeedSource;

/// Collection store that keeps every collection in a process-local map.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollectionStore {
    collections: Arc<DashMap<String, Vec<Value>>>,
    seed: Option<SeedSource>,
}

impl MemoryCollectionStore {
    /// An empty store with no seed data.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that bootstraps untouched collections from `seed`.
    pub fn with_seed(seed: SeedSource) -> Self {
        Self {
            collections: Arc::new(DashMap::new()),
            seed: Some(seed),
        }
    }

    /// Whether `collection` currently holds data.
    pub fn contains(&self, collection: &str) -> bool {
        self.collections.contains_key(collection)
    }

    async fn read_seed(&self, collection: &str) -> AppResult<Option<Vec<Value>>> {
        match &self.seed {
            Some(seed) => seed.read(collection).await,
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CollectionStore for MemoryCollectionStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn load(&self, collection: &str) -> AppResult<Vec<Value>> {
        check_collection_name(collection)?;
        if let Some(records) = self.collections.get(collection) {
            return Ok(records.clone());
        }

        match self.read_seed(collection).await? {
            Some(records) => {
                debug!(collection, count = records.len(), "Bootstrapped collection from seed");
                let cached = self
                    .collections
                    .entry(collection.to_string())
                    .or_insert(records);
                Ok(cached.clone())
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, collection: &str, records: Vec<Value>) -> AppResult<()> {
        check_collection_name(collection)?;
        debug!(collection, count = records.len(), "Saved collection");
        self.collections.insert(collection.to_string(), records);
        Ok(())
    }

    async fn initialize(&self, collection: &str) -> AppResult<bool> {
        check_collection_name(collection)?;
        if self.collections.contains_key(collection) {
            return Ok(false);
        }
        match self.read_seed(collection).await? {
            Some(records) => {
                info!(collection, count = records.len(), "Initialized collection from seed");
                self.collections
                    .entry(collection.to_string())
                    .or_insert(records);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn reset(&self, collection: &str) -> AppResult<()> {
        check_collection_name(collection)?;
        self.collections.remove(collection);
        info!(collection, "Reset collection");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded(dir: &std::path::Path) -> MemoryCollectionStore {
        std::fs::write(
            dir.join("journals.json"),
            r#"{ "journals": [ { "id": "seeded" } ] }"#,
        )
        .unwrap();
        MemoryCollectionStore::with_seed(SeedSource::new(dir))
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryCollectionStore::new();
        store
            .save("notifications", vec![json!({ "id": "n1" })])
            .await
            .unwrap();
        let records = store.load("notifications").await.unwrap();
        assert_eq!(records, vec![json!({ "id": "n1" })]);
    }

    #[tokio::test]
    async fn test_seed_is_read_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded(dir.path());

        assert_eq!(store.load("journals").await.unwrap().len(), 1);
        store.save("journals", Vec::new()).await.unwrap();

        // the saved copy wins over the seed from now on
        std::fs::remove_file(dir.path().join("journals.json")).unwrap();
        assert!(store.load("journals").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_seed_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryCollectionStore::with_seed(SeedSource::new(dir.path()));

        assert!(store.load("journals").await.unwrap().is_empty());
        assert!(!store.contains("journals"));

        seeded(dir.path());
        assert_eq!(store.load("journals").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_initialize_and_reset() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded(dir.path());

        assert!(store.initialize("journals").await.unwrap());
        assert!(!store.initialize("journals").await.unwrap());
        assert!(!store.initialize("users").await.unwrap());

        store.save("journals", Vec::new()).await.unwrap();
        store.reset("journals").await.unwrap();
        assert_eq!(store.load("journals").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_path_like_names() {
        let store = MemoryCollectionStore::new();
        assert!(store.load("../etc").await.unwrap_err().is_validation());
    }
}
