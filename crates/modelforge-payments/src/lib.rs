//! Payment gateway client for ModelForge subscriptions.
//!
//! Talks to the hosted payment service that produces checkout links.
//! The client initiates payments only; confirmation arrives out of band
//! and is applied by the entitlement layer.

pub mod client;

pub use client::{PaymentClient, PaymentConfig, PaymentIntent};
