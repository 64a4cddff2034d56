//! Notifications sent to residents.

pub mod model;

pub use model::{Notification, NotificationStatus, NotificationType};
