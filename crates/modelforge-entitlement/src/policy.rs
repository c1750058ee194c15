//! Pure entitlement decision logic.

use modelforge_core::EntitlementDecision;

/// Free uses granted before a subscription is required.
pub const FREE_TRIAL_ALLOTMENT: u32 = 1;

/// Trial policy: how many free uses a non-subscriber gets.
///
/// Pure and deterministic; no I/O. The allotment is configuration so the
/// policy can be tuned without touching the decision logic.
#[derive(Debug, Clone, Copy)]
pub struct TrialPolicy {
    pub allotment: u32,
}

impl Default for TrialPolicy {
    fn default() -> Self {
        Self {
            allotment: FREE_TRIAL_ALLOTMENT,
        }
    }
}

impl TrialPolicy {
    pub fn new(allotment: u32) -> Self {
        Self { allotment }
    }

    /// Decide whether a privileged action is permitted.
    ///
    /// A subscriber is always permitted. Otherwise the action is permitted
    /// while usage remains under the allotment, and denied with
    /// `trial_exhausted` once the allotment is consumed.
    pub fn evaluate(&self, usage_count: u32, is_subscribed: bool) -> EntitlementDecision {
        if is_subscribed {
            return EntitlementDecision::allowed();
        }
        if usage_count < self.allotment {
            EntitlementDecision::allowed()
        } else {
            EntitlementDecision::denied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_always_permitted() {
        let policy = TrialPolicy::default();
        for usage in [0, 1, 5, 1000] {
            let decision = policy.evaluate(usage, true);
            assert!(decision.permitted);
            assert!(!decision.trial_exhausted);
        }
    }

    #[test]
    fn test_trial_permits_under_allotment() {
        let decision = TrialPolicy::default().evaluate(0, false);
        assert!(decision.permitted);
        assert!(!decision.trial_exhausted);
    }

    #[test]
    fn test_trial_denies_at_allotment() {
        let policy = TrialPolicy::default();
        for usage in [1, 2, 100] {
            let decision = policy.evaluate(usage, false);
            assert!(!decision.permitted);
            assert!(decision.trial_exhausted);
        }
    }

    #[test]
    fn test_tuned_allotment() {
        let policy = TrialPolicy::new(3);
        assert!(policy.evaluate(2, false).permitted);
        assert!(!policy.evaluate(3, false).permitted);
    }

    #[test]
    fn test_deterministic() {
        let policy = TrialPolicy::default();
        assert_eq!(policy.evaluate(1, false), policy.evaluate(1, false));
    }
}
