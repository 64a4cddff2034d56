//! Integration tests for the request-correction and resubmission cycle.

mod helpers;

use clap::Parser;

use residency_cli::Cli;
use residency_core::config::AppConfig;
use residency_core::error::ErrorKind;
use residency_core::types::id::{JournalId, NotificationId, UserId};
use residency_entity::journal::{JournalStatus, PunchKind};
use residency_entity::notification::{NotificationStatus, NotificationType};
use residency_entity::user::UserRole;
use residency_service::{PunchEdit, ReviewDecision};

use helpers::{TestApp, at};

#[tokio::test]
async fn test_correction_round_trip() {
    let app = TestApp::new();
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let ana = app.create_resident("Ana", Some(paulo)).await;
    let journal = app.work_day(&ana, 7).await;

    app.clock.set(at(8, 10, 0));
    let flagged = app
        .state
        .journals
        .set_journal_status(
            &journal.id,
            ReviewDecision::RequestCorrection,
            &paulo,
            Some("Exit looks early".into()),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(flagged.status, JournalStatus::CorrectionRequested);

    let pending = app.state.notifications.pending_corrections(&ana).await.unwrap();
    assert_eq!(pending.len(), 1);
    let notification = &pending[0];
    assert_eq!(notification.kind, NotificationType::CorrectionRequest);
    assert_eq!(notification.journal_id, journal.id);
    assert_eq!(
        notification.message,
        "Correction requested for the journal of 07/03/2024. Reason: Exit looks early"
    );
    assert_eq!(app.state.notifications.unread_count(&ana).await.unwrap(), 1);

    let edit: PunchEdit = "3=17:45".parse().unwrap();
    let resubmitted = app
        .state
        .journals
        .resubmit_after_correction(&journal.id, &[edit], &notification.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resubmitted.status, JournalStatus::Pending);
    assert_eq!(resubmitted.normal_punches()[3].time.to_string(), "17:45");
    assert_eq!(resubmitted.validator_id, Some(paulo));
    assert_eq!(resubmitted.validator_note.as_deref(), Some("Exit looks early"));

    assert_eq!(app.state.notifications.unread_count(&ana).await.unwrap(), 0);
    let listed = app.state.notifications.list_for_resident(&ana).await.unwrap();
    assert_eq!(listed[0].status, NotificationStatus::Read);

    let queue = app.state.journals.pending_for_preceptor(&paulo).await.unwrap();
    assert_eq!(queue.len(), 1);
}

#[tokio::test]
async fn test_blank_correction_note_uses_default() {
    let app = TestApp::new();
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let ana = app.create_resident("Ana", Some(paulo)).await;
    let journal = app.work_day(&ana, 7).await;

    let flagged = app
        .state
        .journals
        .set_journal_status(&journal.id, ReviewDecision::RequestCorrection, &paulo, Some("  ".into()))
        .await
        .unwrap()
        .unwrap();
    let default_note = AppConfig::default().journal.default_correction_note;
    assert_eq!(flagged.validator_note.as_deref(), Some(default_note.as_str()));

    let pending = app.state.notifications.pending_corrections(&ana).await.unwrap();
    assert!(pending[0].message.ends_with(&default_note));
}

#[tokio::test]
async fn test_resubmission_requires_correction_request() {
    let app = TestApp::new();
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let ana = app.create_resident("Ana", Some(paulo)).await;
    let journal = app.work_day(&ana, 7).await;

    let err = app
        .state
        .journals
        .resubmit_after_correction(&journal.id, &[], &NotificationId::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_out_of_range_edit_leaves_journal_untouched() {
    let app = TestApp::new();
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let ana = app.create_resident("Ana", Some(paulo)).await;
    app.punch(&ana, 7, 8, 0, PunchKind::Entry).await;
    let journal = app.punch(&ana, 7, 17, 0, PunchKind::Exit).await;

    app.state
        .journals
        .set_journal_status(&journal.id, ReviewDecision::RequestCorrection, &paulo, None)
        .await
        .unwrap();
    let notification = app.state.notifications.pending_corrections(&ana).await.unwrap()[0].clone();

    let edit: PunchEdit = "5=09:00".parse().unwrap();
    let err = app
        .state
        .journals
        .resubmit_after_correction(&journal.id, &[edit], &notification.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let stored = app.state.journals.journal_by_id(&journal.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JournalStatus::CorrectionRequested);
    assert_eq!(app.state.notifications.unread_count(&ana).await.unwrap(), 1);
}

#[tokio::test]
async fn test_relaxed_transitions_allow_re_review() {
    let mut config = AppConfig::default();
    config.journal.strict_transitions = false;
    let app = TestApp::with_config(config);
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let ana = app.create_resident("Ana", Some(paulo)).await;
    let journal = app.work_day(&ana, 7).await;

    for decision in [ReviewDecision::Approve, ReviewDecision::Reject] {
        app.state
            .journals
            .set_journal_status(&journal.id, decision, &paulo, None)
            .await
            .unwrap();
    }
    let stored = app.state.journals.journal_by_id(&journal.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JournalStatus::Rejected);

    let resubmitted = app
        .state
        .journals
        .resubmit_after_correction(&journal.id, &[], &NotificationId::new())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resubmitted.status, JournalStatus::Pending);
}

async fn submit_correction(
    app: &TestApp,
    resident: &UserId,
    journal: &JournalId,
    notification: &NotificationId,
) -> Result<(), residency_core::AppError> {
    let as_user = resident.to_string();
    let journal = journal.to_string();
    let notification = notification.to_string();
    let cli = Cli::try_parse_from([
        "residency",
        "--as",
        as_user.as_str(),
        "--format",
        "json",
        "correction",
        "submit",
        journal.as_str(),
        notification.as_str(),
        "--set",
        "3=17:30",
    ])
    .unwrap();
    cli.execute_with(&app.state).await
}

#[tokio::test]
async fn test_correction_submit_rejects_another_residents_notification() {
    let app = TestApp::new();
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let ana = app.create_resident("Ana", Some(paulo)).await;
    let bruno = app.create_resident("Bruno", Some(paulo)).await;
    let ana_journal = app.work_day(&ana, 7).await;
    let bruno_journal = app.work_day(&bruno, 7).await;
    for journal in [&ana_journal, &bruno_journal] {
        app.state
            .journals
            .set_journal_status(&journal.id, ReviewDecision::RequestCorrection, &paulo, None)
            .await
            .unwrap();
    }
    let bruno_request = app.state.notifications.pending_corrections(&bruno).await.unwrap()[0].clone();

    let err = submit_correction(&app, &ana, &ana_journal.id, &bruno_request.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    assert_eq!(app.state.notifications.unread_count(&ana).await.unwrap(), 1);
    assert_eq!(app.state.notifications.unread_count(&bruno).await.unwrap(), 1);
    let stored = app.state.journals.journal_by_id(&ana_journal.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JournalStatus::CorrectionRequested);
}

#[tokio::test]
async fn test_correction_submit_requires_matching_journal() {
    let app = TestApp::new();
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let ana = app.create_resident("Ana", Some(paulo)).await;
    let earlier = app.work_day(&ana, 6).await;
    let later = app.work_day(&ana, 7).await;
    app.state
        .journals
        .set_journal_status(&earlier.id, ReviewDecision::RequestCorrection, &paulo, None)
        .await
        .unwrap();
    app.state
        .journals
        .set_journal_status(&later.id, ReviewDecision::RequestCorrection, &paulo, None)
        .await
        .unwrap();
    let requests = app.state.notifications.pending_corrections(&ana).await.unwrap();
    let for_earlier = requests.iter().find(|n| n.journal_id == earlier.id).unwrap().id;
    let for_later = requests.iter().find(|n| n.journal_id == later.id).unwrap().id;

    let err = submit_correction(&app, &ana, &later.id, &for_earlier)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(app.state.notifications.unread_count(&ana).await.unwrap(), 2);

    submit_correction(&app, &ana, &later.id, &for_later).await.unwrap();
    let stored = app.state.journals.journal_by_id(&later.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JournalStatus::Pending);
    assert_eq!(stored.normal_punches()[3].time.to_string(), "17:30");
    assert_eq!(app.state.notifications.unread_count(&ana).await.unwrap(), 1);
}
