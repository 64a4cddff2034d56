//! Resident profile repository.

use std::sync::Arc;

use residency_core::result::AppResult;
use residency_core::traits::CollectionStore;
use residency_core::types::id::UserId;
use residency_entity::user::ResidentProfile;

use super::collection::CollectionRepository;

/// Queries over the `residents` collection.
#[derive(Debug, Clone)]
pub struct ResidentRepository {
    records: CollectionRepository<ResidentProfile>,
}

impl ResidentRepository {
    /// Create a new resident repository.
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            records: CollectionRepository::new(store),
        }
    }

    /// Find a resident profile by the resident's user id.
    pub async fn find_by_id(&self, id: &UserId) -> AppResult<Option<ResidentProfile>> {
        self.records.find_by_id(id).await
    }

    /// Profiles whose preceptor is `preceptor_id`.
    pub async fn find_supervised_by(&self, preceptor_id: &UserId) -> AppResult<Vec<ResidentProfile>> {
        self.records
            .find_where(|r| r.is_supervised_by(preceptor_id))
            .await
    }
}
