//! Core traits defined in `residency-core` and implemented by other crates.

pub mod clock;
pub mod record;
pub mod store;

pub use clock::Clock;
pub use record::Record;
pub use store::CollectionStore;
