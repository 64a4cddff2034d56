//! User record.

use serde::{Deserialize, Serialize};

use residency_core::traits::Record;
use residency_core::types::id::UserId;

use super::role::UserRole;

/// An account in the residency system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Name shown in review queues.
    pub full_name: String,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// Role.
    pub role: UserRole,
}

impl Record for User {
    type Id = UserId;
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &UserId {
        &self.id
    }
}
