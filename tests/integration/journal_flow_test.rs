//! Integration tests for the punch, history and review flow.

mod helpers;

use residency_core::error::ErrorKind;
use residency_entity::journal::{DayActivityKind, JournalStatus, MonthKey, PunchKind};
use residency_entity::user::UserRole;
use residency_service::journal::{WorkedTime, day_summary};
use residency_service::{ActivityInput, JournalScope, PunchState, ReviewDecision};

use helpers::{ANA, BRUNO, CLARA, PAULO, TestApp, id};

#[tokio::test]
async fn test_full_day_is_summarized() {
    let app = TestApp::new();
    let ana = app.create_resident("Ana", None).await;

    let journal = app.work_day(&ana, 7).await;

    let summary = day_summary(&journal);
    assert_eq!(summary.sessions.len(), 1);
    assert_eq!(summary.sessions[0].breaks.len(), 1);
    assert_eq!(summary.sessions[0].worked, WorkedTime::Minutes(8 * 60));
    assert_eq!(summary.total_minutes, 480);
    assert_eq!(
        app.state.journals.punch_state(&ana).await.unwrap(),
        PunchState::Finished
    );
}

#[tokio::test]
async fn test_out_of_sequence_punch_is_rejected() {
    let app = TestApp::new();
    let ana = app.create_resident("Ana", None).await;
    app.punch(&ana, 7, 8, 0, PunchKind::Entry).await;
    app.punch(&ana, 7, 12, 0, PunchKind::BreakStart).await;

    app.clock.set(helpers::at(7, 13, 0));
    let err = app
        .state
        .journals
        .record_punch_or_activity(&ana, ActivityInput::Punch(PunchKind::Exit), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let today = app.state.journals.today_journal(&ana).await.unwrap().unwrap();
    assert_eq!(today.normal_punches().len(), 2);
}

#[tokio::test]
async fn test_day_activities_share_the_daily_journal() {
    let app = TestApp::new();
    let ana = app.create_resident("Ana", None).await;

    app.state
        .journals
        .record_punch_or_activity(
            &ana,
            ActivityInput::day_with_periods(DayActivityKind::TheoryClass, true, false),
            Some("Theory block".into()),
        )
        .await
        .unwrap();
    app.punch(&ana, 7, 13, 0, PunchKind::Entry).await;
    let journal = app
        .state
        .journals
        .record_punch_or_activity(
            &ana,
            ActivityInput::day_with_periods(DayActivityKind::TheoryClass, true, true),
            Some("ignored after creation".into()),
        )
        .await
        .unwrap();

    assert_eq!(journal.activities.len(), 2);
    assert_eq!(journal.general_justification.as_deref(), Some("Theory block"));
    let class = journal.day_activities().next().unwrap();
    assert_eq!(class.detail(), Some("Morning, Afternoon"));

    let all = app
        .state
        .journals
        .journals_for_resident(&ana, JournalScope::All)
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_preceptor_reviews_only_supervised_residents() {
    let app = TestApp::new();
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let other = app.create_user("Dra. Helena", UserRole::Preceptor).await;
    let ana = app.create_resident("Ana Souza", Some(paulo)).await;
    let bruno = app.create_resident("Bruno Lima", Some(other)).await;

    app.work_day(&ana, 5).await;
    app.work_day(&ana, 6).await;
    app.work_day(&bruno, 6).await;

    let queue = app.state.journals.pending_for_preceptor(&paulo).await.unwrap();
    assert_eq!(queue.len(), 2);
    assert!(queue.iter().all(|r| r.resident_name == "Ana Souza"));
    assert!(queue[0].journal.date < queue[1].journal.date);

    let first = queue[0].journal.id;
    app.clock.set(helpers::at(8, 9, 30));
    let approved = app
        .state
        .journals
        .set_journal_status(&first, ReviewDecision::Approve, &paulo, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(approved.status, JournalStatus::Approved);
    assert_eq!(approved.validator_id, Some(paulo));
    assert_eq!(approved.validation_date, Some(helpers::at(8, 9, 30)));

    let queue = app.state.journals.pending_for_preceptor(&paulo).await.unwrap();
    assert_eq!(queue.len(), 1);
    let reviewed = app.state.journals.reviewed_for_preceptor(&paulo).await.unwrap();
    assert_eq!(reviewed.len(), 1);
    assert_eq!(reviewed[0].journal.id, first);

    let err = app
        .state
        .journals
        .set_journal_status(&first, ReviewDecision::Reject, &paulo, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_history_scopes_and_months() {
    let app = TestApp::new();
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let ana = app.create_resident("Ana", Some(paulo)).await;

    let reviewed = app.work_day(&ana, 4).await;
    app.work_day(&ana, 5).await;
    app.state
        .journals
        .set_journal_status(&reviewed.id, ReviewDecision::Reject, &paulo, Some("Missing break".into()))
        .await
        .unwrap();

    let queue = app
        .state
        .journals
        .journals_for_resident(&ana, JournalScope::Queue)
        .await
        .unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].status, JournalStatus::Pending);

    let history = app
        .state
        .journals
        .journals_for_resident(&ana, JournalScope::History)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].validator_note.as_deref(), Some("Missing break"));

    let months = app.state.journals.available_months(&ana).await.unwrap();
    let march: MonthKey = "03/2024".parse().unwrap();
    assert_eq!(months, vec![march]);
    let in_march = app.state.journals.journals_for_month(&ana, march).await.unwrap();
    assert_eq!(in_march.len(), 2);
    assert!(in_march[0].date > in_march[1].date);
}

#[tokio::test]
async fn test_missing_journal_review_returns_none() {
    let app = TestApp::new();
    let paulo = app.create_user("Dr. Paulo", UserRole::Preceptor).await;
    let outcome = app
        .state
        .journals
        .set_journal_status(
            &residency_core::types::id::JournalId::new(),
            ReviewDecision::Approve,
            &paulo,
            None,
        )
        .await
        .unwrap();
    assert!(outcome.is_none());
}

#[tokio::test]
async fn test_seeded_queue_and_overnight_session() {
    let app = TestApp::seeded();

    let queue = app
        .state
        .journals
        .pending_for_preceptor(&id(PAULO))
        .await
        .unwrap();
    assert_eq!(queue.len(), 2);
    assert!(queue.iter().all(|r| r.journal.resident_id != id(CLARA)));

    let bruno = queue
        .iter()
        .find(|r| r.journal.resident_id == id(BRUNO))
        .unwrap();
    assert_eq!(bruno.resident_name, "Bruno Lima");
    let summary = day_summary(&bruno.journal);
    assert_eq!(summary.sessions[0].worked, WorkedTime::Minutes(12 * 60));

    let reviewed = app
        .state
        .journals
        .reviewed_for_preceptor(&id(PAULO))
        .await
        .unwrap();
    assert_eq!(reviewed.len(), 1);
    assert_eq!(reviewed[0].journal.resident_id, id(ANA));
    assert_eq!(day_summary(&reviewed[0].journal).total_minutes, 11 * 60);
}

#[tokio::test]
async fn test_acting_user_must_exist_and_hold_role() {
    let app = TestApp::seeded();

    let ctx = app
        .state
        .actor_with_role(Some(PAULO), UserRole::Preceptor)
        .await
        .unwrap();
    assert_eq!(ctx.full_name, "Dr. Paulo Rocha");

    let err = app
        .state
        .actor_with_role(Some(ANA), UserRole::Preceptor)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    let err = app.state.actor(None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}
