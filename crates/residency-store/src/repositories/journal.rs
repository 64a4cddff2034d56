//! Journal repository.

use std::collections::HashSet;
use std::sync::Arc;

use residency_core::result::AppResult;
use residency_core::traits::CollectionStore;
use residency_core::types::id::{JournalId, UserId};
use residency_entity::journal::{Journal, JournalDate};

use super::collection::CollectionRepository;

/// Queries over the `journals` collection.
#[derive(Debug, Clone)]
pub struct JournalRepository {
    records: CollectionRepository<Journal>,
}

impl JournalRepository {
    /// Create a new journal repository.
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            records: CollectionRepository::new(store),
        }
    }

    /// The underlying typed collection.
    pub fn records(&self) -> &CollectionRepository<Journal> {
        &self.records
    }

    /// Find a journal by id.
    pub async fn find_by_id(&self, id: &JournalId) -> AppResult<Option<Journal>> {
        self.records.find_by_id(id).await
    }

    /// The journal of `resident_id` for `date`.
    pub async fn find_for_day(
        &self,
        resident_id: &UserId,
        date: JournalDate,
    ) -> AppResult<Option<Journal>> {
        Ok(self
            .records
            .load_all()
            .await?
            .into_iter()
            .find(|j| &j.resident_id == resident_id && j.date == date))
    }

    /// Every journal owned by `resident_id`.
    pub async fn find_by_resident(&self, resident_id: &UserId) -> AppResult<Vec<Journal>> {
        self.records
            .find_where(|j| &j.resident_id == resident_id)
            .await
    }

    /// Every journal owned by any of `resident_ids`.
    pub async fn find_by_residents(&self, resident_ids: &HashSet<UserId>) -> AppResult<Vec<Journal>> {
        self.records
            .find_where(|j| resident_ids.contains(&j.resident_id))
            .await
    }

    /// Insert `journal`, or overwrite the stored journal with the same id.
    pub async fn upsert(&self, journal: &Journal) -> AppResult<()> {
        let mut all = self.records.load_all().await?;
        match all.iter_mut().find(|j| j.id == journal.id) {
            Some(slot) => *slot = journal.clone(),
            None => all.push(journal.clone()),
        }
        self.records.save_all(&all).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryCollectionStore;

    #[tokio::test]
    async fn test_day_lookup_uses_resident_and_date() {
        let repo = JournalRepository::new(Arc::new(MemoryCollectionStore::new()));
        let ana = UserId::new();
        let bruno = UserId::new();
        let day = JournalDate::from_ymd(2024, 3, 7).unwrap();
        let next = JournalDate::from_ymd(2024, 3, 8).unwrap();

        let mut journal = Journal::new(ana, day, None);
        repo.upsert(&journal).await.unwrap();
        repo.upsert(&Journal::new(bruno, day, None)).await.unwrap();

        assert_eq!(repo.find_for_day(&ana, day).await.unwrap().unwrap().id, journal.id);
        assert!(repo.find_for_day(&ana, next).await.unwrap().is_none());

        journal.validator_note = Some("ok".into());
        repo.upsert(&journal).await.unwrap();
        assert_eq!(repo.records().load_all().await.unwrap().len(), 2);
        assert_eq!(repo.find_by_resident(&ana).await.unwrap()[0].validator_note.as_deref(), Some("ok"));
    }
}
