//! # residency-cli
//!
//! Command-line screens for the residency journal system: the clock-in
//! screen, history views, the preceptor review queues and store
//! maintenance. Role checks happen here, before a service is called.

pub mod commands;
pub mod output;
pub mod state;

pub use commands::Cli;
pub use state::AppState;
