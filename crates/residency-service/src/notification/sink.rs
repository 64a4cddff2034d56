//! Destination for notifications created by the journal workflow.

use std::fmt::Debug;

use async_trait::async_trait;

use residency_core::result::AppResult;
use residency_entity::notification::Notification;

/// Accepts notifications for eventual display to a resident.
#[async_trait]
pub trait NotificationSink: Send + Sync + Debug + 'static {
    /// Hand over a freshly created notification.
    async fn deliver(&self, notification: Notification) -> AppResult<()>;
}
