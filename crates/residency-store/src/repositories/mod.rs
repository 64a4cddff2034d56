//! Typed repositories over the collection store.

pub mod collection;
pub mod journal;
pub mod notification;
pub mod resident;
pub mod user;

pub use collection::CollectionRepository;
pub use journal::JournalRepository;
pub use notification::NotificationRepository;
pub use resident::ResidentRepository;
pub use user::UserRepository;
