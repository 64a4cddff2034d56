//! Application wiring shared by every command.

use std::sync::Arc;

use tracing::debug;

use residency_core::AppError;
use residency_core::config::AppConfig;
use residency_core::traits::{Clock, CollectionStore};
use residency_core::types::id::UserId;
use residency_entity::user::UserRole;
use residency_service::{
    IdentityService, JournalService, NotificationService, RequestContext, SupervisionService,
    SystemClock,
};
use residency_store::StoreManager;
use residency_store::repositories::{
    JournalRepository, NotificationRepository, ResidentRepository, UserRepository,
};

/// Services built once per invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Collection store.
    pub store: StoreManager,
    /// Journal manager.
    pub journals: JournalService,
    /// Resident notifications.
    pub notifications: NotificationService,
    /// Acting-user lookup.
    pub identity: IdentityService,
    /// Preceptor to resident relation.
    pub supervision: Arc<SupervisionService>,
}

impl AppState {
    /// Wire the services over the configured store and the system clock.
    pub async fn build(config: &AppConfig) -> Result<Self, AppError> {
        let store = StoreManager::new(&config.store).await?;
        debug!(backend = store.backend(), "Collection store ready");
        Ok(Self::from_parts(store, Arc::new(SystemClock), config))
    }

    /// Wire the services over an existing store and clock.
    pub fn from_parts(store: StoreManager, clock: Arc<dyn Clock>, config: &AppConfig) -> Self {
        let shared: Arc<dyn CollectionStore> = store.store();

        let user_repo = Arc::new(UserRepository::new(shared.clone()));
        let notif_repo = Arc::new(NotificationRepository::new(shared.clone()));
        let resident_repo = Arc::new(ResidentRepository::new(shared.clone()));
        let journal_repo = Arc::new(JournalRepository::new(shared));

        let notifications = NotificationService::new(notif_repo.clone());
        let supervision = Arc::new(SupervisionService::new(resident_repo));
        let identity = IdentityService::new(user_repo.clone());
        let journals = JournalService::new(
            journal_repo,
            notif_repo,
            user_repo,
            supervision.clone(),
            Arc::new(notifications.clone()),
            clock,
            config.journal.clone(),
        );

        Self {
            store,
            journals,
            notifications,
            identity,
            supervision,
        }
    }

    /// Resolve the acting user from `--as` / `RESIDENCY_USER`.
    pub async fn actor(&self, as_user: Option<&str>) -> Result<RequestContext, AppError> {
        let raw = as_user.ok_or_else(|| {
            AppError::authorization("No acting user; pass --as <user-id> or set RESIDENCY_USER")
        })?;
        let user_id: UserId = raw
            .parse()
            .map_err(|_| AppError::validation(format!("Invalid user id: '{raw}'")))?;
        self.identity.resolve(user_id).await
    }

    /// Resolve the acting user and require `role`.
    pub async fn actor_with_role(
        &self,
        as_user: Option<&str>,
        role: UserRole,
    ) -> Result<RequestContext, AppError> {
        let ctx = self.actor(as_user).await?;
        ctx.require_role(role)?;
        Ok(ctx)
    }
}
