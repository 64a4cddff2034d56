//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use residency_cli::AppState;
use residency_core::config::AppConfig;
use residency_core::traits::CollectionStore;
use residency_core::types::id::UserId;
use residency_entity::journal::{Journal, PunchKind};
use residency_entity::user::{ResidentProfile, User, UserRole};
use residency_service::{ActivityInput, FixedClock};
use residency_store::repositories::CollectionRepository;
use residency_store::{MemoryCollectionStore, SeedSource, StoreManager};

/// Seeded resident Ana Souza.
pub const ANA: &str = "0190a1b2-0000-7000-8000-000000000001";
/// Seeded resident Bruno Lima.
pub const BRUNO: &str = "0190a1b2-0000-7000-8000-000000000002";
/// Seeded resident Clara Mendes, supervised by Helena Prado.
pub const CLARA: &str = "0190a1b2-0000-7000-8000-000000000003";
/// Seeded preceptor of Ana and Bruno.
pub const PAULO: &str = "0190a1b2-0000-7000-8000-000000000010";
/// Seeded preceptor of Clara.
pub const HELENA: &str = "0190a1b2-0000-7000-8000-000000000011";

/// A March 2024 timestamp.
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn id(raw: &str) -> UserId {
    raw.parse().unwrap()
}

pub fn seed_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("seed")
}

/// Test application wired over an in-memory store and a fixed clock.
pub struct TestApp {
    pub state: AppState,
    pub clock: Arc<FixedClock>,
    pub store: Arc<MemoryCollectionStore>,
}

impl TestApp {
    /// Empty store, clock at 2024-03-07 08:00.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::build(MemoryCollectionStore::new(), config)
    }

    /// Store backed by the repository's `seed/` directory.
    pub fn seeded() -> Self {
        Self::build(
            MemoryCollectionStore::with_seed(SeedSource::new(seed_dir())),
            AppConfig::default(),
        )
    }

    fn build(store: MemoryCollectionStore, config: AppConfig) -> Self {
        let store = Arc::new(store);
        let clock = Arc::new(FixedClock::new(at(7, 8, 0)));
        let shared: Arc<dyn CollectionStore> = store.clone();
        let state = AppState::from_parts(StoreManager::from_store(shared), clock.clone(), &config);
        Self {
            state,
            clock,
            store,
        }
    }

    fn dyn_store(&self) -> Arc<dyn CollectionStore> {
        self.store.clone()
    }

    /// Insert a user with `role`.
    pub async fn create_user(&self, name: &str, role: UserRole) -> UserId {
        let id = UserId::new();
        CollectionRepository::<User>::new(self.dyn_store())
            .insert(User {
                id,
                full_name: name.to_string(),
                email: None,
                role,
            })
            .await
            .unwrap();
        id
    }

    /// Insert a resident user and profile supervised by `preceptor`.
    pub async fn create_resident(&self, name: &str, preceptor: Option<UserId>) -> UserId {
        let id = self.create_user(name, UserRole::Resident).await;
        CollectionRepository::<ResidentProfile>::new(self.dyn_store())
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

    /// Record `kind` for `resident` at `hour:minute` on 2024-03-`day`.
    pub async fn punch(&self, resident: &UserId, day: u32, hour: u32, minute: u32, kind: PunchKind) -> Journal {
        self.clock.set(at(day, hour, minute));
        self.state
            .journals
            .record_punch_or_activity(resident, ActivityInput::Punch(kind), None)
            .await
            .unwrap()
    }

    /// A full 08:00-17:00 day with a 12:00-13:00 break.
    pub async fn work_day(&self, resident: &UserId, day: u32) -> Journal {
        self.punch(resident, day, 8, 0, PunchKind::Entry).await;
        self.punch(resident, day, 12, 0, PunchKind::BreakStart).await;
        self.punch(resident, day, 13, 0, PunchKind::BreakEnd).await;
        self.punch(resident, day, 17, 0, PunchKind::Exit).await
    }
}
