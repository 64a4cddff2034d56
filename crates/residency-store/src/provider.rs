//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use residency_core::config::store::StoreConfig;
use residency_core::error::AppError;
use residency_core::result::AppResult;
use residency_core::traits::store::CollectionStore;

use crate::file::FileCollectionStore;
use crate::memory::MemoryCollectionStore;
use crate::seed::SeedSource;

/// Every collection the journal system persists.
pub const COLLECTIONS: [&str; 4] = ["users", "residents", "journals", "notifications"];

/// Wraps the collection store selected by configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn CollectionStore>,
}

impl StoreManager {
    /// Build the backend named by `config.provider`.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let seed = SeedSource::new(&config.seed_dir);
        let inner: Arc<dyn CollectionStore> = match config.provider.as_str() {
            "file" => {
                info!(data_dir = %config.data_dir, seed_dir = %config.seed_dir, "Initializing file collection store");
                Arc::new(FileCollectionStore::new(&config.data_dir, seed).await?)
            }
            "memory" => {
                info!(seed_dir = %config.seed_dir, "Initializing in-memory collection store");
                Arc::new(MemoryCollectionStore::with_seed(seed))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: file, memory"
                )));
            }
        };
        Ok(Self { inner })
    }

    /// Wrap an existing store (for testing).
    pub fn from_store(store: Arc<dyn CollectionStore>) -> Self {
        Self { inner: store }
    }

    /// Shared handle to the inner store.
    pub fn store(&self) -> Arc<dyn CollectionStore> {
        Arc::clone(&self.inner)
    }

    /// Seed every known collection that has no data yet.
    ///
    /// Returns the collections that were populated.
    pub async fn initialize_all(&self) -> AppResult<Vec<&'static str>> {
        let mut seeded = Vec::new();
        for collection in COLLECTIONS {
            if self.inner.initialize(collection).await? {
                seeded.push(collection);
            }
        }
        Ok(seeded)
    }
}

#[async_trait]
impl CollectionStore for StoreManager {
    fn backend(&self) -> &str {
        self.inner.backend()
    }

    async fn load(&self, collection: &str) -> AppResult<Vec<Value>> {
        self.inner.load(collection).await
    }

    async fn save(&self, collection: &str, records: Vec<Value>) -> AppResult<()> {
        self.inner.save(collection, records).await
    }

    async fn initialize(&self, collection: &str) -> AppResult<bool> {
        self.inner.initialize(collection).await
    }

    async fn reset(&self, collection: &str) -> AppResult<()> {
        self.inner.reset(collection).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
