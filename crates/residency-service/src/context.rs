//! Request context carrying the acting user and role.

use serde::{Deserialize, Serialize};

use residency_core::AppError;
use residency_core::types::id::UserId;
use residency_entity::user::{User, UserRole};

/// Who is acting in the current command.
///
/// Resolved by [`crate::IdentityService`] and checked by the calling
/// screen before it invokes a service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user's ID.
    pub user_id: UserId,
    /// The user's role.
    pub role: UserRole,
    /// Display name.
    pub full_name: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, role: UserRole, full_name: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            full_name: full_name.into(),
        }
    }

    /// Fails with an authorization error unless the user has `role`.
    pub fn require_role(&self, role: UserRole) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "This action requires the {role} role; {} is a {}",
                self.full_name, self.role
            )))
        }
    }
}

impl From<&User> for RequestContext {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role, user.full_name.clone())
    }
}
