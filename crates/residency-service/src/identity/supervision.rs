//! Preceptor to resident supervision lookups.

use std::collections::HashSet;
use std::sync::Arc;

use residency_core::AppError;
use residency_core::types::id::UserId;
use residency_store::repositories::ResidentRepository;

/// Answers which residents a preceptor supervises.
#[derive(Debug, Clone)]
pub struct SupervisionService {
    /// Resident profile repository.
    resident_repo: Arc<ResidentRepository>,
}

impl SupervisionService {
    /// Creates a new supervision service.
    pub fn new(resident_repo: Arc<ResidentRepository>) -> Self {
        Self { resident_repo }
    }

    /// Ids of the residents supervised by `preceptor_id`.
    pub async fn residents_of(&self, preceptor_id: &UserId) -> Result<HashSet<UserId>, AppError> {
        Ok(self
            .resident_repo
            .find_supervised_by(preceptor_id)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect())
    }
}
