//! Integration tests for the file-backed collection store.

mod helpers;

use std::sync::Arc;

use residency_cli::AppState;
use residency_core::config::AppConfig;
use residency_core::config::store::StoreConfig;
use residency_core::error::ErrorKind;
use residency_core::traits::CollectionStore;
use residency_entity::journal::{JournalStatus, PunchKind};
use residency_service::{ActivityInput, FixedClock, ReviewDecision};
use residency_store::StoreManager;
use residency_store::provider::COLLECTIONS;

use helpers::{ANA, PAULO, at, id, seed_dir};

fn file_config(dir: &tempfile::TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.store = StoreConfig {
        provider: "file".into(),
        data_dir: dir.path().join("data").display().to_string(),
        seed_dir: seed_dir().display().to_string(),
    };
    config
}

async fn open(config: &AppConfig, clock: Arc<FixedClock>) -> AppState {
    let store = StoreManager::new(&config.store).await.unwrap();
    AppState::from_parts(store, clock, config)
}

#[tokio::test]
async fn test_initialize_seeds_every_collection_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    let store = StoreManager::new(&config.store).await.unwrap();

    let seeded = store.initialize_all().await.unwrap();
    assert_eq!(seeded, COLLECTIONS.to_vec());
    for collection in COLLECTIONS {
        assert!(dir.path().join("data").join(format!("{collection}.json")).is_file());
    }

    let again = store.initialize_all().await.unwrap();
    assert!(again.is_empty());
    assert_eq!(store.load("users").await.unwrap().len(), 8);
}

#[tokio::test]
async fn test_writes_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    let clock = Arc::new(FixedClock::new(at(7, 7, 30)));
    let ana = id(ANA);

    let state = open(&config, clock.clone()).await;
    state
        .journals
        .record_punch_or_activity(&ana, ActivityInput::Punch(PunchKind::Entry), None)
        .await
        .unwrap();
    drop(state);

    clock.set(at(7, 16, 0));
    let state = open(&config, clock.clone()).await;
    let journal = state
        .journals
        .record_punch_or_activity(&ana, ActivityInput::Punch(PunchKind::Exit), None)
        .await
        .unwrap();
    assert_eq!(journal.normal_punches().len(), 2);

    let queue = state.journals.pending_for_preceptor(&id(PAULO)).await.unwrap();
    assert!(queue.iter().any(|r| r.journal.id == journal.id));

    state
        .journals
        .set_journal_status(&journal.id, ReviewDecision::Approve, &id(PAULO), None)
        .await
        .unwrap();
    let reopened = open(&config, clock).await;
    let stored = reopened.journals.journal_by_id(&journal.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JournalStatus::Approved);
}

#[tokio::test]
async fn test_reset_restores_seed_contents() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    let clock = Arc::new(FixedClock::new(at(7, 7, 30)));

    let state = open(&config, clock.clone()).await;
    state
        .journals
        .record_punch_or_activity(&id(ANA), ActivityInput::Punch(PunchKind::Entry), None)
        .await
        .unwrap();
    assert_eq!(state.store.load("journals").await.unwrap().len(), 5);

    state.store.reset("journals").await.unwrap();
    assert_eq!(state.store.load("journals").await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_unknown_provider_is_a_configuration_error() {
    let config = StoreConfig {
        provider: "postgres".into(),
        ..StoreConfig::default()
    };
    let err = StoreManager::new(&config).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}

#[tokio::test]
async fn test_invalid_collection_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = StoreManager::new(&file_config(&dir).store).await.unwrap();
    let err = store.load("../escape").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}
