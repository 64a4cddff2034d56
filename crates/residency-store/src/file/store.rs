//! Collection store persisting each collection as a JSON array on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, info};

use residency_core::error::{AppError, ErrorKind};
use residency_core::result::AppResult;
use residency_core::traits::store::CollectionStore;

use crate::check_collection_name;
use crate::seed::SeedSource;

/// Collection store writing `<data_dir>/<collection>.json`.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// failed save leaves the previous contents in place.
#[derive(Debug, Clone)]
pub struct FileCollectionStore {
    data_dir: PathBuf,
    seed: SeedSource,
}

impl FileCollectionStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub async fn new(data_dir: impl Into<PathBuf>, seed: SeedSource) -> AppResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create data directory: {}", data_dir.display()),
                e,
            )
        })?;
        Ok(Self { data_dir, seed })
    }

    /// The data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    async fn read_persisted(&self, collection: &str) -> AppResult<Option<Vec<Value>>> {
        let path = self.path_for(collection);
        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read collection file: {}", path.display()),
                    e,
                ));
            }
        };
        let records = serde_json::from_slice(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Corrupt collection file: {}", path.display()),
                e,
            )
        })?;
        Ok(Some(records))
    }

    async fn write_persisted(&self, collection: &str, records: &[Value]) -> AppResult<()> {
        let path = self.path_for(collection);
        let tmp = self.data_dir.join(format!(".{collection}.json.tmp"));
        let data = serde_json::to_vec_pretty(records)?;

        fs::write(&tmp, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write collection file: {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace collection file: {}", path.display()),
                e,
            )
        })?;

        debug!(collection, bytes = data.len(), "Wrote collection file");
        Ok(())
    }
}

#[async_trait]
impl CollectionStore for FileCollectionStore {
    fn backend(&self) -> &str {
        "file"
    }

    async fn load(&self, collection: &str) -> AppResult<Vec<Value>> {
        check_collection_name(collection)?;
        if let Some(records) = self.read_persisted(collection).await? {
            return Ok(records);
        }
        match self.seed.read(collection).await? {
            Some(records) => {
                self.write_persisted(collection, &records).await?;
                debug!(collection, count = records.len(), "Bootstrapped collection from seed");
                Ok(records)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, collection: &str, records: Vec<Value>) -> AppResult<()> {
        check_collection_name(collection)?;
        self.write_persisted(collection, &records).await
    }

    async fn initialize(&self, collection: &str) -> AppResult<bool> {
        check_collection_name(collection)?;
        if fs::try_exists(self.path_for(collection)).await? {
            return Ok(false);
        }
        match self.seed.read(collection).await? {
            Some(records) => {
                self.write_persisted(collection, &records).await?;
                info!(collection, count = records.len(), "Initialized collection from seed");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn reset(&self, collection: &str) -> AppResult<()> {
        check_collection_name(collection)?;
        let path = self.path_for(collection);
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to remove collection file: {}", path.display()),
                    e,
                ));
            }
        }
        info!(collection, "Reset collection");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.data_dir.is_dir())
    }
}
