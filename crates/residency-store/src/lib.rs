//! # residency-store
//!
//! Collection stores for the residency journal system. A collection is a
//! named list of JSON records that is read and rewritten wholesale.
//!
//! - **file**: one `<collection>.json` file per collection under the data directory
//! - **memory**: process-local maps, used by tests and throwaway sessions
//!
//! Both backends bootstrap an untouched collection from a seed directory
//! once. The backend is selected at runtime from configuration.

pub mod file;
pub mod memory;
pub mod provider;
pub mod repositories;
pub mod seed;

pub use file::FileCollectionStore;
pub use memory::MemoryCollectionStore;
pub use provider::StoreManager;
pub use repositories::CollectionRepository;
pub use seed::SeedSource;

use residency_core::AppError;
use residency_core::result::AppResult;

/// Reject collection names that could escape the data directory.
pub(crate) fn check_collection_name(collection: &str) -> AppResult<()> {
    let valid = !collection.is_empty()
        && collection
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Invalid collection name: '{collection}'"
        )))
    }
}
