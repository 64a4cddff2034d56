//! Resident profile record carrying the supervision relation.

use serde::{Deserialize, Serialize};

use residency_core::traits::Record;
use residency_core::types::id::{ClassGroupId, UserId};

/// Program data for a user with the resident role.
///
/// `id` is the resident's [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentProfile {
    /// The resident's user id.
    pub id: UserId,
    /// Supervising preceptor, if assigned.
    #[serde(default)]
    pub preceptor_id: Option<UserId>,
    /// Class group, if assigned.
    #[serde(default)]
    pub class_group_id: Option<ClassGroupId>,
    /// Program registration number.
    #[serde(default)]
    pub registration: String,
}

impl ResidentProfile {
    /// Whether `preceptor_id` supervises this resident.
    pub fn is_supervised_by(&self, preceptor_id: &UserId) -> bool {
        self.preceptor_id.as_ref() == Some(preceptor_id)
    }
}

impl Record for ResidentProfile {
    type Id = UserId;
    const COLLECTION: &'static str = "residents";

    fn id(&self) -> &UserId {
        &self.id
    }
}
