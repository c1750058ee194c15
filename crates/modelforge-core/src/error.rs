//! Error types for the ModelForge entitlement subsystem.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Caller errors
    #[error("Invalid payment amount: {0} (must be positive)")]
    InvalidAmount(f64),

    // Payment gateway errors
    #[error("Network error reaching payment service: {0}")]
    Transport(String),

    #[error("Payment service error: {0}")]
    PaymentService(String),

    #[error("Malformed payment service response: {0}")]
    MalformedResponse(String),

    // Persistence errors (write path only; reads degrade to defaults)
    #[error("Storage error: {0}")]
    Storage(String),

    // Generic
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
