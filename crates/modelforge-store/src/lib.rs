//! Local key-value persistence for ModelForge entitlement state.
//!
//! Provides the `KeyValueStore` port with in-memory and file-backed
//! adapters, and the typed `UsageStore` wrapper the entitlement layer
//! reads and writes through.

pub mod providers;
pub mod usage;

pub use providers::{FileStore, KeyValueStore, MemoryStore};
pub use usage::{KEY_SUBSCRIBED, KEY_USAGE_COUNT, UsageStore};
