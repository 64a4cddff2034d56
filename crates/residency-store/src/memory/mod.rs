//! In-process collection store.

pub mod store;

pub use store::MemoryCollectionStore;
