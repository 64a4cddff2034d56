//! JSON-file collection store.

pub mod store;

pub use store::FileCollectionStore;
