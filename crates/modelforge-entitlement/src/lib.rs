//! Entitlement tracking for ModelForge paid features.
//!
//! Decides whether a user may run a privileged action, meters free-trial
//! consumption, and drives the upgrade path through the payment gateway.
//! Enforcement is advisory: this layer runs client-side and is not a
//! security boundary. No server re-validates the subscription before
//! granting access.

pub mod confirm;
pub mod coordinator;
pub mod policy;

pub use confirm::{ConfirmationStatus, PaymentConfirmation, apply_confirmation};
pub use coordinator::EntitlementCoordinator;
pub use policy::{FREE_TRIAL_ALLOTMENT, TrialPolicy};
