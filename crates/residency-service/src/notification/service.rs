//! Notification listing and read-state management.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use residency_core::AppError;
use residency_core::result::AppResult;
use residency_core::types::id::{NotificationId, UserId};
use residency_entity::notification::{Notification, NotificationStatus, NotificationType};
use residency_store::repositories::NotificationRepository;

use super::sink::NotificationSink;

/// Manages resident notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Find a notification by id.
    pub async fn notification_by_id(
        &self,
        notification_id: &NotificationId,
    ) -> Result<Option<Notification>, AppError> {
        self.notif_repo.find_by_id(notification_id).await
    }

    /// Notifications for `resident_id`, newest first.
    pub async fn list_for_resident(&self, resident_id: &UserId) -> Result<Vec<Notification>, AppError> {
        let mut notifications = self.notif_repo.find_by_resident(resident_id).await?;
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    /// Number of unread notifications for `resident_id`.
    pub async fn unread_count(&self, resident_id: &UserId) -> Result<usize, AppError> {
        Ok(self
            .notif_repo
            .find_by_resident(resident_id)
            .await?
            .iter()
            .filter(|n| n.is_unread())
            .count())
    }

    /// Mark a notification as read. Returns `false` when it does not exist.
    pub async fn mark_read(&self, notification_id: &NotificationId) -> Result<bool, AppError> {
        let updated = self
            .notif_repo
            .set_status(notification_id, NotificationStatus::Read)
            .await?;
        if updated {
            info!(notification_id = %notification_id, "Notification marked read");
        }
        Ok(updated)
    }

    /// Correction requests the resident has not resolved yet, newest first.
    pub async fn pending_corrections(&self, resident_id: &UserId) -> Result<Vec<Notification>, AppError> {
        Ok(self
            .list_for_resident(resident_id)
            .await?
            .into_iter()
            .filter(|n| n.is_unread() && n.kind == NotificationType::CorrectionRequest)
            .collect())
    }
}

#[async_trait]
impl NotificationSink for NotificationService {
    async fn deliver(&self, notification: Notification) -> AppResult<()> {
        info!(
            notification_id = %notification.id,
            resident_id = %notification.resident_id,
            journal_id = %notification.journal_id,
            kind = %notification.kind,
            "Notification created"
        );
        self.notif_repo.create(notification).await
    }
}
