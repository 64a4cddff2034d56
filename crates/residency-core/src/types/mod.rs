//! Core type definitions used across the residency workspace.

pub mod id;

pub use id::*;
