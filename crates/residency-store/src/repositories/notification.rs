//! Notification repository.

use std::sync::Arc;

use residency_core::result::AppResult;
use residency_core::traits::CollectionStore;
use residency_core::types::id::{NotificationId, UserId};
use residency_entity::notification::{Notification, NotificationStatus};

use super::collection::CollectionRepository;

/// Queries over the `notifications` collection.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    records: CollectionRepository<Notification>,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            records: CollectionRepository::new(store),
        }
    }

    /// Append a notification.
    pub async fn create(&self, notification: Notification) -> AppResult<()> {
        self.records.insert(notification).await
    }

    /// Find a notification by id.
    pub async fn find_by_id(&self, id: &NotificationId) -> AppResult<Option<Notification>> {
        self.records.find_by_id(id).await
    }

    /// Notifications addressed to `resident_id`, in stored order.
    pub async fn find_by_resident(&self, resident_id: &UserId) -> AppResult<Vec<Notification>> {
        self.records
            .find_where(|n| &n.resident_id == resident_id)
            .await
    }

    /// Set the status of a notification. Returns `false` when it does not exist.
    pub async fn set_status(&self, id: &NotificationId, status: NotificationStatus) -> AppResult<bool> {
        match self.records.find_by_id(id).await? {
            Some(mut notification) => {
                notification.status = status;
                self.records.replace(notification).await
            }
            None => Ok(false),
        }
    }
}
