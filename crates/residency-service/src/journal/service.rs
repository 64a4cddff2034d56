//! Recording punches and activities, and the approval state machine.

use std::sync::Arc;

use tracing::{debug, info, warn};

use residency_core::AppError;
use residency_core::config::journal::JournalConfig;
use residency_core::traits::Clock;
use residency_core::types::id::{JournalId, NotificationId, UserId};
use residency_entity::journal::{ClockTime, Journal, JournalDate, JournalStatus, Punch};
use residency_entity::notification::{Notification, NotificationStatus};
use residency_store::repositories::{JournalRepository, NotificationRepository, UserRepository};

use crate::identity::SupervisionService;
use crate::notification::NotificationSink;

use super::input::{ActivityInput, PunchEdit, ReviewDecision};
use super::sequencing::{PunchState, check_punch_time};

/// Records residents' daily journals and drives their review.
///
/// Every mutation reads the whole journal collection, changes one journal
/// and writes the collection back. Validation happens before the write, so
/// a rejected call leaves the store untouched.
#[derive(Debug, Clone)]
pub struct JournalService {
    /// Journal repository.
    pub(super) journal_repo: Arc<JournalRepository>,
    /// Notification repository, for resolving correction requests.
    notif_repo: Arc<NotificationRepository>,
    /// User repository, for resident names in review queues.
    pub(super) user_repo: Arc<UserRepository>,
    /// Preceptor to resident relation.
    pub(super) supervision: Arc<SupervisionService>,
    /// Where correction requests are sent.
    sink: Arc<dyn NotificationSink>,
    /// Source of "today" and "now".
    pub(super) clock: Arc<dyn Clock>,
    /// Workflow policy.
    config: JournalConfig,
}

impl JournalService {
    /// Creates a new journal service.
    pub fn new(
        journal_repo: Arc<JournalRepository>,
        notif_repo: Arc<NotificationRepository>,
        user_repo: Arc<UserRepository>,
        supervision: Arc<SupervisionService>,
        sink: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
        config: JournalConfig,
    ) -> Self {
        Self {
            journal_repo,
            notif_repo,
            user_repo,
            supervision,
            sink,
            clock,
            config,
        }
    }

    /// Today's date according to the clock.
    pub fn today(&self) -> JournalDate {
        JournalDate::new(self.clock.today())
    }

    /// Record a punch or day activity into the resident's journal for today.
    ///
    /// The journal is created on first use; `justification` is only kept
    /// at creation. Punches are appended in call order.
    pub async fn record_punch_or_activity(
        &self,
        resident_id: &UserId,
        input: ActivityInput,
        justification: Option<String>,
    ) -> Result<Journal, AppError> {
        let today = self.today();
        let mut all = self.journal_repo.records().load_all().await?;

        let position = all
            .iter()
            .position(|j| &j.resident_id == resident_id && j.date == today);
        let mut journal = match position {
            Some(i) => all[i].clone(),
            None => Journal::new(*resident_id, today, justification),
        };

        match &input {
            ActivityInput::Punch(kind) => {
                let time = ClockTime::from_time(self.clock.time_of_day());
                let punches = journal.normal_punches();
                let state = PunchState::from_punches(punches);
                if self.config.enforce_punch_sequence && !state.permits(*kind) {
                    return Err(AppError::validation(format!(
                        "Cannot record {} while {}; allowed: {}",
                        kind.label().to_lowercase(),
                        state.label().to_lowercase(),
                        state
                            .allowed()
                            .iter()
                            .map(|k| k.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )));
                }
                check_punch_time(punches, *kind, time)?;
                journal.push_punch(Punch::new(time, *kind));
                info!(
                    journal_id = %journal.id,
                    resident_id = %resident_id,
                    kind = %kind,
                    time = %time,
                    "Punch recorded"
                );
            }
            ActivityInput::Day { kind, detail } => {
                journal.upsert_day_activity(*kind, detail.clone());
                info!(
                    journal_id = %journal.id,
                    resident_id = %resident_id,
                    kind = %kind,
                    "Day activity recorded"
                );
            }
        }

        match position {
            Some(i) => all[i] = journal.clone(),
            None => {
                debug!(journal_id = %journal.id, date = %today, "Created journal");
                all.push(journal.clone());
            }
        }
        self.journal_repo.records().save_all(&all).await?;
        Ok(journal)
    }

    /// The resident's sequencing state for today.
    pub async fn punch_state(&self, resident_id: &UserId) -> Result<PunchState, AppError> {
        let journal = self
            .journal_repo
            .find_for_day(resident_id, self.today())
            .await?;
        Ok(journal
            .as_ref()
            .map(|j| PunchState::from_punches(j.normal_punches()))
            .unwrap_or(PunchState::NotStarted))
    }

    /// Apply a validator's decision to a journal.
    ///
    /// Returns `Ok(None)` when the journal does not exist. Requesting a
    /// correction also notifies the owning resident; the notification is
    /// delivered before the journal is written, so a failed delivery leaves
    /// the journal unchanged.
    pub async fn set_journal_status(
        &self,
        journal_id: &JournalId,
        decision: ReviewDecision,
        validator_id: &UserId,
        note: Option<String>,
    ) -> Result<Option<Journal>, AppError> {
        let mut all = self.journal_repo.records().load_all().await?;
        let Some(journal) = all.iter_mut().find(|j| &j.id == journal_id) else {
            debug!(journal_id = %journal_id, "Journal not found for review");
            return Ok(None);
        };

        if self.config.strict_transitions && !journal.status.is_pending() {
            return Err(AppError::conflict(format!(
                "Journal {journal_id} is {}; only pending journals can be reviewed",
                journal.status
            )));
        }

        let note = note.filter(|n| !n.trim().is_empty());
        let note = match decision {
            ReviewDecision::RequestCorrection => {
                Some(note.unwrap_or_else(|| self.config.default_correction_note.clone()))
            }
            ReviewDecision::Approve | ReviewDecision::Reject => note,
        };

        journal.status = decision.target_status();
        journal.validator_id = Some(*validator_id);
        journal.validation_date = Some(self.clock.now());
        journal.validator_note = note;
        let journal = journal.clone();

        if decision == ReviewDecision::RequestCorrection {
            let notification = Notification::correction_request(
                journal.resident_id,
                journal.id,
                journal.date,
                journal.validator_note.as_deref().unwrap_or_default(),
                self.clock.now(),
            );
            self.sink.deliver(notification).await?;
        }

        self.journal_repo.records().save_all(&all).await?;
        info!(
            journal_id = %journal.id,
            validator_id = %validator_id,
            status = %journal.status,
            "Journal reviewed"
        );

        Ok(Some(journal))
    }

    /// Apply the resident's punch edits and send the journal back to review.
    ///
    /// Validator fields are left as they were. The referenced notification
    /// is marked read; a missing notification only logs a warning.
    pub async fn resubmit_after_correction(
        &self,
        journal_id: &JournalId,
        edits: &[PunchEdit],
        notification_id: &NotificationId,
    ) -> Result<Option<Journal>, AppError> {
        let mut all = self.journal_repo.records().load_all().await?;
        let Some(journal) = all.iter_mut().find(|j| &j.id == journal_id) else {
            debug!(journal_id = %journal_id, "Journal not found for resubmission");
            return Ok(None);
        };

        if self.config.strict_transitions && journal.status != JournalStatus::CorrectionRequested {
            return Err(AppError::conflict(format!(
                "Journal {journal_id} is {}; only journals with a correction request can be resubmitted",
                journal.status
            )));
        }

        if !edits.is_empty() {
            let punches = journal.normal_punches_mut().ok_or_else(|| {
                AppError::validation(format!("Journal {journal_id} has no punches to edit"))
            })?;
            if let Some(bad) = edits.iter().find(|e| e.index >= punches.len()) {
                return Err(AppError::validation(format!(
                    "Punch index {} is out of range; the journal has {} punches",
                    bad.index,
                    punches.len()
                )));
            }
            for edit in edits {
                punches[edit.index].time = edit.time;
            }
        }

        journal.status = JournalStatus::Pending;
        let journal = journal.clone();
        self.journal_repo.records().save_all(&all).await?;
        info!(
            journal_id = %journal.id,
            edits = edits.len(),
            "Journal resubmitted after correction"
        );

        if !self
            .notif_repo
            .set_status(notification_id, NotificationStatus::Read)
            .await?
        {
            warn!(notification_id = %notification_id, "Correction notification not found");
        }

        Ok(Some(journal))
    }
}
