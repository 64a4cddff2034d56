//! Generic repository decoding a collection into typed records.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use residency_core::error::{AppError, ErrorKind};
use residency_core::result::AppResult;
use residency_core::traits::{CollectionStore, Record};

/// Reads and rewrites the whole collection of `T` on every call.
#[derive(Debug)]
pub struct CollectionRepository<T: Record> {
    store: Arc<dyn CollectionStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for CollectionRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _record: PhantomData,
        }
    }
}

impl<T: Record> CollectionRepository<T> {
    /// Create a repository over `store`.
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Every record in the collection, in stored order.
    pub async fn load_all(&self) -> AppResult<Vec<T>> {
        self.store
            .load(T::COLLECTION)
            .await?
            .into_iter()
            .map(|value| {
                serde_json::from_value(value).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Serialization,
                        format!("Invalid record in '{}'", T::COLLECTION),
                        e,
                    )
                })
            })
            .collect()
    }

    /// Replace the whole collection.
    pub async fn save_all(&self, records: &[T]) -> AppResult<()> {
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;
        self.store.save(T::COLLECTION, values).await
    }

    /// The record with `id`, if any.
    pub async fn find_by_id(&self, id: &T::Id) -> AppResult<Option<T>> {
        Ok(self.load_all().await?.into_iter().find(|r| r.id() == id))
    }

    /// Records matching `predicate`, in stored order.
    pub async fn find_where<F>(&self, predicate: F) -> AppResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|r| predicate(r))
            .collect())
    }

    /// Append a record.
    pub async fn insert(&self, record: T) -> AppResult<()> {
        let mut all = self.load_all().await?;
        all.push(record);
        self.save_all(&all).await
    }

    /// Overwrite the record sharing `record`'s id. Returns `false` when absent.
    pub async fn replace(&self, record: T) -> AppResult<bool> {
        let mut all = self.load_all().await?;
        match all.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                self.save_all(&all).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
