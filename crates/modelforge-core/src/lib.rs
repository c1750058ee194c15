//! ModelForge Entitlement Core
//!
//! Shared domain types and error handling for the entitlement subsystem.
//! This crate has minimal dependencies and defines the vocabulary used
//! across the store, policy, and payment crates.

pub mod entitlement;
pub mod error;

pub use entitlement::{EntitlementDecision, EntitlementState};
pub use error::{Error, Result};
