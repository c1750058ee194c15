//! Typed usage and subscription state over a key-value store.

use crate::providers::KeyValueStore;
use modelforge_core::Result;
use tracing::{debug, info, warn};

/// Key for the free-trial usage counter (decimal-string integer).
pub const KEY_USAGE_COUNT: &str = "usageCount";

/// Key for the subscription flag (`"true"` means subscribed).
pub const KEY_SUBSCRIBED: &str = "isSubscribed";

/// Typed wrapper over a [`KeyValueStore`] for entitlement state.
///
/// Reads never fail outward: absent, corrupt, or unreadable state degrades
/// to the documented defaults (count 0, not subscribed). Writes propagate
/// storage errors to the caller.
pub struct UsageStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> UsageStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current usage count, or 0 if never set.
    pub async fn usage_count(&self) -> u32 {
        match self.store.get(KEY_USAGE_COUNT).await {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(store = self.store.name(), raw = %raw, "Corrupt usage count, treating as 0");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!(store = self.store.name(), error = %e, "Usage count read failed, treating as 0");
                0
            }
        }
    }

    /// Increment the usage counter and return the new value.
    ///
    /// Read-modify-write with no locking: a second invocation racing the
    /// first may lose an increment. Accepted for the single-user,
    /// single-tab domain.
    pub async fn increment_usage(&self) -> Result<u32> {
        let current = self.usage_count().await;
        let next = current + 1;
        self.store
            .set(KEY_USAGE_COUNT, &next.to_string())
            .await?;
        info!(usage = next, "Recorded privileged action usage");
        Ok(next)
    }

    /// Reset the usage counter to 0 (test/debug operation).
    pub async fn reset_usage(&self) -> Result<()> {
        self.store.set(KEY_USAGE_COUNT, "0").await?;
        debug!("Usage count reset");
        Ok(())
    }

    /// Whether the user holds an active subscription. Only the literal
    /// string `"true"` reads as subscribed.
    pub async fn is_subscribed(&self) -> bool {
        match self.store.get(KEY_SUBSCRIBED).await {
            Ok(Some(raw)) => raw == "true",
            Ok(None) => false,
            Err(e) => {
                warn!(store = self.store.name(), error = %e, "Subscription flag read failed, treating as false");
                false
            }
        }
    }

    /// Persist the subscription flag unconditionally.
    pub async fn set_subscribed(&self, value: bool) -> Result<()> {
        self.store
            .set(KEY_SUBSCRIBED, if value { "true" } else { "false" })
            .await?;
        info!(subscribed = value, "Subscription flag updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{FileStore, MemoryStore};
    use std::collections::HashMap;

    fn store() -> UsageStore<MemoryStore> {
        UsageStore::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn test_usage_count_defaults_to_zero() {
        assert_eq!(store().usage_count().await, 0);
    }

    #[tokio::test]
    async fn test_increment_is_sequential() {
        let store = store();
        for expected in 1..=4u32 {
            assert_eq!(store.increment_usage().await.unwrap(), expected);
        }
        assert_eq!(store.usage_count().await, 4);
    }

    #[tokio::test]
    async fn test_reset_clears_prior_usage() {
        let store = store();
        store.increment_usage().await.unwrap();
        store.increment_usage().await.unwrap();
        store.reset_usage().await.unwrap();
        assert_eq!(store.usage_count().await, 0);
    }

    #[tokio::test]
    async fn test_subscription_flag_roundtrip() {
        let store = store();
        assert!(!store.is_subscribed().await);

        store.set_subscribed(true).await.unwrap();
        assert!(store.is_subscribed().await);

        store.set_subscribed(false).await.unwrap();
        assert!(!store.is_subscribed().await);
    }

    #[tokio::test]
    async fn test_corrupt_values_degrade_to_defaults() {
        let mut seed = HashMap::new();
        seed.insert(KEY_USAGE_COUNT.to_string(), "banana".to_string());
        seed.insert(KEY_SUBSCRIBED.to_string(), "yes".to_string());

        let store = UsageStore::new(MemoryStore::from_map(seed));
        assert_eq!(store.usage_count().await, 0);
        assert!(!store.is_subscribed().await);
    }

    #[tokio::test]
    async fn test_corrupt_file_degrades_reads_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entitlement.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        // The raw layer errors on the unreadable file; the typed wrapper
        // keeps the never-fails-outward read contract.
        let store = UsageStore::new(FileStore::new(&path));
        assert_eq!(store.usage_count().await, 0);
        assert!(!store.is_subscribed().await);
    }
}
