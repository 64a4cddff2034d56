//! User repository.

use std::collections::HashMap;
use std::sync::Arc;

use residency_core::result::AppResult;
use residency_core::traits::CollectionStore;
use residency_core::types::id::UserId;
use residency_entity::user::User;

use super::collection::CollectionRepository;

/// Queries over the `users` collection.
#[derive(Debug, Clone)]
pub struct UserRepository {
    records: CollectionRepository<User>,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            records: CollectionRepository::new(store),
        }
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        self.records.find_by_id(id).await
    }

    /// Full names keyed by user id.
    pub async fn names(&self) -> AppResult<HashMap<UserId, String>> {
        Ok(self
            .records
            .load_all()
            .await?
            .into_iter()
            .map(|u| (u.id, u.full_name))
            .collect())
    }

    /// Every user.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.records.load_all().await
    }
}
