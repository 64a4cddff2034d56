//! Identity resolution and the supervision relation.

pub mod service;
pub mod supervision;

pub use service::IdentityService;
pub use supervision::SupervisionService;
