//! Resident notifications.

pub mod service;
pub mod sink;

pub use service::NotificationService;
pub use sink::NotificationSink;
