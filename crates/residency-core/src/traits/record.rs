//! Records persisted as members of a named collection.

use std::fmt::Display;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record type stored in a [`CollectionStore`](super::CollectionStore).
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Identifier type of the record.
    type Id: PartialEq + Display + Send + Sync;

    /// Name of the collection holding this record type.
    const COLLECTION: &'static str;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;
}
