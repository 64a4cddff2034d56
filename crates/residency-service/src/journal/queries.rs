//! Read-only journal queries behind the history and review screens.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use residency_core::AppError;
use residency_core::types::id::{JournalId, UserId};
use residency_entity::journal::{Journal, MonthKey};

use super::input::JournalScope;
use super::service::JournalService;

/// Name shown when a journal's resident has no user record.
pub const UNKNOWN_RESIDENT: &str = "Unknown resident";

/// A journal together with its resident's display name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedJournal {
    /// The journal.
    #[serde(flatten)]
    pub journal: Journal,
    /// The owning resident's full name.
    pub resident_name: String,
}

fn newest_first(journals: &mut [Journal]) {
    journals.sort_by(|a, b| b.date.cmp(&a.date));
}

impl JournalService {
    /// Find a journal by id.
    pub async fn journal_by_id(&self, journal_id: &JournalId) -> Result<Option<Journal>, AppError> {
        self.journal_repo.find_by_id(journal_id).await
    }

    /// The resident's journal for today, if one was started.
    pub async fn today_journal(&self, resident_id: &UserId) -> Result<Option<Journal>, AppError> {
        self.journal_repo
            .find_for_day(resident_id, self.today())
            .await
    }

    /// The resident's journals in `scope`, newest date first.
    pub async fn journals_for_resident(
        &self,
        resident_id: &UserId,
        scope: JournalScope,
    ) -> Result<Vec<Journal>, AppError> {
        let mut journals: Vec<Journal> = self
            .journal_repo
            .find_by_resident(resident_id)
            .await?
            .into_iter()
            .filter(|j| scope.includes(j.status))
            .collect();
        newest_first(&mut journals);
        Ok(journals)
    }

    /// Distinct months the resident has journals in, newest first.
    pub async fn available_months(&self, resident_id: &UserId) -> Result<Vec<MonthKey>, AppError> {
        let months: BTreeSet<MonthKey> = self
            .journal_repo
            .find_by_resident(resident_id)
            .await?
            .iter()
            .map(|j| j.date.month())
            .collect();
        Ok(months.into_iter().rev().collect())
    }

    /// The resident's journals dated in `month`, newest first.
    pub async fn journals_for_month(
        &self,
        resident_id: &UserId,
        month: MonthKey,
    ) -> Result<Vec<Journal>, AppError> {
        let mut journals = self
            .journal_repo
            .records()
            .find_where(|j| &j.resident_id == resident_id && j.date.month() == month)
            .await?;
        newest_first(&mut journals);
        Ok(journals)
    }

    /// Pending journals of the residents `preceptor_id` supervises, oldest first.
    pub async fn pending_for_preceptor(
        &self,
        preceptor_id: &UserId,
    ) -> Result<Vec<ReviewedJournal>, AppError> {
        let mut journals = self.supervised_journals(preceptor_id).await?;
        journals.retain(|j| j.status.is_pending());
        journals.sort_by(|a, b| a.date.cmp(&b.date));
        self.with_resident_names(journals).await
    }

    /// Journals of supervised residents that left the pending state,
    /// most recently reviewed first.
    pub async fn reviewed_for_preceptor(
        &self,
        preceptor_id: &UserId,
    ) -> Result<Vec<ReviewedJournal>, AppError> {
        let mut journals = self.supervised_journals(preceptor_id).await?;
        journals.retain(|j| !j.status.is_pending());
        journals.sort_by(|a, b| {
            b.validation_date
                .cmp(&a.validation_date)
                .then_with(|| b.date.cmp(&a.date))
        });
        self.with_resident_names(journals).await
    }

    async fn supervised_journals(&self, preceptor_id: &UserId) -> Result<Vec<Journal>, AppError> {
        let residents = self.supervision.residents_of(preceptor_id).await?;
        if residents.is_empty() {
            return Ok(Vec::new());
        }
        self.journal_repo.find_by_residents(&residents).await
    }

    async fn with_resident_names(
        &self,
        journals: Vec<Journal>,
    ) -> Result<Vec<ReviewedJournal>, AppError> {
        let names: HashMap<UserId, String> = self.user_repo.names().await?;
        Ok(journals
            .into_iter()
            .map(|journal| {
                let resident_name = names
                    .get(&journal.resident_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_RESIDENT.to_string());
                ReviewedJournal {
                    journal,
                    resident_name,
                }
            })
            .collect())
    }
}
