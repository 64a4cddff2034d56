//! Resolves user ids into request contexts.

use std::sync::Arc;

use tracing::debug;

use residency_core::AppError;
use residency_core::types::id::UserId;
use residency_store::repositories::UserRepository;

use crate::context::RequestContext;

/// Looks up the acting user.
#[derive(Debug, Clone)]
pub struct IdentityService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl IdentityService {
    /// Creates a new identity service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Build the context for `user_id`.
    pub async fn resolve(&self, user_id: UserId) -> Result<RequestContext, AppError> {
        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;
        debug!(user_id = %user.id, role = %user.role, "Resolved user");
        Ok(RequestContext::from(&user))
    }
}
