//! Entitlement coordinator: the surface the UI layer calls.

use crate::policy::TrialPolicy;
use modelforge_core::{EntitlementDecision, EntitlementState, Result};
use modelforge_payments::{PaymentClient, PaymentIntent};
use modelforge_store::{KeyValueStore, UsageStore};
use tracing::{debug, info};

/// Orchestrates the usage store, trial policy, and payment client.
///
/// The store is injected so tests substitute an in-memory fake. All
/// checks here are advisory (client-side trust model): this layer trusts
/// its caller to check entitlement before recording usage.
pub struct EntitlementCoordinator<S: KeyValueStore> {
    store: UsageStore<S>,
    policy: TrialPolicy,
    payments: PaymentClient,
}

impl<S: KeyValueStore> EntitlementCoordinator<S> {
    pub fn new(store: UsageStore<S>, policy: TrialPolicy, payments: PaymentClient) -> Self {
        Self {
            store,
            policy,
            payments,
        }
    }

    /// Whether the user may run a privileged action right now.
    ///
    /// Read-only and idempotent; safe to call repeatedly.
    pub async fn can_perform_privileged_action(&self) -> EntitlementDecision {
        let usage = self.store.usage_count().await;
        let subscribed = self.store.is_subscribed().await;
        let decision = self.policy.evaluate(usage, subscribed);
        debug!(
            usage = usage,
            subscribed = subscribed,
            permitted = decision.permitted,
            "Entitlement check"
        );
        decision
    }

    /// Record that a permitted privileged action completed.
    ///
    /// Intended to be called only after a positive entitlement check;
    /// calling it unchecked is a caller error this layer does not reject.
    pub async fn record_privileged_action_usage(&self) -> Result<u32> {
        self.store.increment_usage().await
    }

    /// Start the upgrade flow: obtain a checkout link for the given
    /// amount. Local entitlement state is untouched until the external
    /// confirmation path applies the provider's answer.
    pub async fn begin_upgrade(&self, amount: f64) -> Result<PaymentIntent> {
        let intent = self.payments.create_payment(amount).await?;
        info!(reference = %intent.reference, "Upgrade initiated");
        Ok(intent)
    }

    /// Current position in the entitlement lifecycle.
    ///
    /// `Subscribed` is absorbing; there is no transition back to a trial
    /// state here.
    pub async fn entitlement_state(&self) -> EntitlementState {
        if self.store.is_subscribed().await {
            return EntitlementState::Subscribed;
        }
        if self.store.usage_count().await < self.policy.allotment {
            EntitlementState::TrialAvailable
        } else {
            EntitlementState::TrialExhausted
        }
    }

    /// The underlying usage store, for the confirmation path.
    pub fn store(&self) -> &UsageStore<S> {
        &self.store
    }
}
