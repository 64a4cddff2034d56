//! Static seed data used to bootstrap untouched collections.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;
use tracing::debug;

use residency_core::error::{AppError, ErrorKind};
use residency_core::result::AppResult;

/// A directory of `<collection>.json` seed files.
///
/// Each file holds an object with a single key named after the collection:
/// `{ "journals": [ ... ] }`.
#[derive(Debug, Clone)]
pub struct SeedSource {
    dir: PathBuf,
}

impl SeedSource {
    /// Seed files are looked up under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The seed directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the seed records for `collection`.
    ///
    /// Returns `Ok(None)` when no seed file exists. A file that is not valid
    /// JSON, or lacks the collection key, is a serialization error.
    pub async fn read(&self, collection: &str) -> AppResult<Option<Vec<Value>>> {
        let path = self.dir.join(format!("{collection}.json"));
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(collection, path = %path.display(), "No seed file");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read seed file: {}", path.display()),
                    e,
                ));
            }
        };

        let mut document: Value = serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Malformed seed file: {}", path.display()),
                e,
            )
        })?;

        match document.get_mut(collection).map(Value::take) {
            Some(Value::Array(records)) => {
                debug!(collection, count = records.len(), "Loaded seed records");
                Ok(Some(records))
            }
            _ => Err(AppError::new(
                ErrorKind::Serialization,
                format!(
                    "Seed file {} must contain an array under '{collection}'",
                    path.display()
                ),
            )),
        }
    }
}
