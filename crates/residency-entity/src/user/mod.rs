//! Accounts and the supervision relation.

pub mod model;
pub mod resident;
pub mod role;

pub use model::User;
pub use resident::ResidentProfile;
pub use role::UserRole;
