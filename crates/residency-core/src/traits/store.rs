//! Collection store trait for pluggable persistence backends.

use async_trait::async_trait;
use serde_json::Value;

use crate::result::AppResult;

/// A named-collection key-value store.
///
/// Each collection (`"journals"`, `"notifications"`, ...) is a list of JSON
/// records that is read and rewritten wholesale. A collection that has never
/// been written is bootstrapped once from the backend's seed source; later
/// reads serve the stored copy until it is overwritten or reset.
#[async_trait]
pub trait CollectionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Short backend name (`"memory"`, `"file"`).
    fn backend(&self) -> &str;

    /// Load every record of a collection, seeding it first if absent.
    async fn load(&self, collection: &str) -> AppResult<Vec<Value>>;

    /// Replace the whole collection.
    async fn save(&self, collection: &str, records: Vec<Value>) -> AppResult<()>;

    /// Bootstrap the collection from the seed source if it holds no data yet.
    ///
    /// Returns `true` when the seed was applied, `false` when data already
    /// existed or no seed file is available.
    async fn initialize(&self, collection: &str) -> AppResult<bool>;

    /// Forget the stored copy so the next read seeds again.
    async fn reset(&self, collection: &str) -> AppResult<()>;

    /// Check that the backend is usable.
    async fn health_check(&self) -> AppResult<bool>;
}
