//! Entitlement decision and state types.

use serde::{Deserialize, Serialize};

/// Outcome of an entitlement check.
///
/// Derived from the current usage count and subscription flag on every
/// check; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementDecision {
    /// Whether the privileged action may proceed.
    pub permitted: bool,
    /// Whether the free-trial allotment has been consumed.
    pub trial_exhausted: bool,
}

impl EntitlementDecision {
    /// Unconditional allow (active subscriber or trial remaining).
    pub fn allowed() -> Self {
        Self {
            permitted: true,
            trial_exhausted: false,
        }
    }

    /// Deny: trial consumed and no subscription.
    pub fn denied() -> Self {
        Self {
            permitted: false,
            trial_exhausted: true,
        }
    }
}

/// Position in the entitlement lifecycle.
///
/// `Subscribed` is absorbing: there is no transition back to a trial
/// state within this subsystem (expiry/renewal is not modeled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementState {
    TrialAvailable,
    TrialExhausted,
    Subscribed,
}
