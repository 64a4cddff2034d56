//! # residency-entity
//!
//! Domain records for the residency journal system. Every struct in this
//! crate is either a record persisted in a named collection (and
//! implements [`residency_core::traits::Record`]) or a value object
//! embedded in one. Records serialize with camelCase field names.

pub mod journal;
pub mod notification;
pub mod user;
