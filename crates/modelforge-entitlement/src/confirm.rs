//! Payment confirmation path.
//!
//! Confirmation arrives out of band, from a return-URL handler or a
//! provider webhook. This module applies that event to local state; it
//! does not verify provider signatures or model settlement.

use modelforge_core::Result;
use modelforge_store::{KeyValueStore, UsageStore};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Provider-reported outcome of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationStatus {
    Succeeded,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Confirmation event correlated to an earlier payment intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// Reference returned by `create_payment` for this attempt.
    pub reference: String,
    pub status: ConfirmationStatus,
}

/// Apply a confirmation to the local subscription flag.
///
/// Only a `Succeeded` confirmation marks the user subscribed; anything
/// else leaves local state as is. Returns whether the flag was set.
pub async fn apply_confirmation<S: KeyValueStore>(
    store: &UsageStore<S>,
    confirmation: &PaymentConfirmation,
) -> Result<bool> {
    match confirmation.status {
        ConfirmationStatus::Succeeded => {
            store.set_subscribed(true).await?;
            info!(reference = %confirmation.reference, "Payment confirmed, subscription active");
            Ok(true)
        }
        ConfirmationStatus::Failed => {
            warn!(reference = %confirmation.reference, "Payment failed, subscription unchanged");
            Ok(false)
        }
        ConfirmationStatus::Unknown => {
            warn!(reference = %confirmation.reference, "Unknown confirmation status, ignoring");
            Ok(false)
        }
    }
}
