//! Shared setup for journal service tests.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use residency_core::config::journal::JournalConfig;
use residency_core::traits::CollectionStore;
use residency_core::types::id::UserId;
use residency_entity::user::{ResidentProfile, User, UserRole};
use residency_store::MemoryCollectionStore;
use residency_store::repositories::{
    CollectionRepository, JournalRepository, NotificationRepository, ResidentRepository,
    UserRepository,
};

use crate::clock::FixedClock;
use crate::identity::SupervisionService;
use crate::notification::{NotificationService, NotificationSink};

use super::service::JournalService;

pub(crate) fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub(crate) struct Fixture {
    pub service: JournalService,
    pub notifications: NotificationService,
    pub clock: Arc<FixedClock>,
    pub store: Arc<MemoryCollectionStore>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(JournalConfig::default())
    }

    pub fn with_config(config: JournalConfig) -> Self {
        Self::build(config, None)
    }

    /// Route correction requests to `sink` instead of the notification service.
    pub fn with_sink(config: JournalConfig, sink: Arc<dyn NotificationSink>) -> Self {
        Self::build(config, Some(sink))
    }

    fn build(config: JournalConfig, sink: Option<Arc<dyn NotificationSink>>) -> Self {
        let store = Arc::new(MemoryCollectionStore::new());
        let dyn_store: Arc<dyn CollectionStore> = store.clone();
        let clock = Arc::new(FixedClock::new(at(7, 8, 0)));

        let notif_repo = Arc::new(NotificationRepository::new(dyn_store.clone()));
        let notifications = NotificationService::new(notif_repo.clone());
        let sink: Arc<dyn NotificationSink> = match sink {
            Some(sink) => sink,
            None => Arc::new(notifications.clone()),
        };
        let supervision = Arc::new(SupervisionService::new(Arc::new(ResidentRepository::new(
            dyn_store.clone(),
        ))));

        let service = JournalService::new(
            Arc::new(JournalRepository::new(dyn_store.clone())),
            notif_repo,
            Arc::new(UserRepository::new(dyn_store)),
            supervision,
            sink,
            clock.clone(),
            config,
        );

        Self {
            service,
            notifications,
            clock,
            store,
        }
    }

    /// Add a resident supervised by `preceptor`, returning the resident id.
    pub async fn add_resident(&self, name: &str, preceptor: Option<UserId>) -> UserId {
        let id = UserId::new();
        let store: Arc<dyn CollectionStore> = self.store.clone();
        CollectionRepository::<User>::new(store.clone())
            .insert(User {
                id,
                full_name: name.to_string(),
                email: None,
                role: UserRole::Resident,
            })
            .await
            .unwrap();
        CollectionRepository::<ResidentProfile>::new(store)
            .insert(ResidentProfile {
                id,
                preceptor_id: preceptor,
                class_group_id: None,
                registration: format!("R-{}", id.short()),
            })
            .await
            .unwrap();
        id
    }
}
