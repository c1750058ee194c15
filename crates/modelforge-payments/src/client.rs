//! HTTP client for the payment-initiation endpoint.

use chrono::{DateTime, Utc};
use modelforge_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Payment service configuration.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Base URL of the payment service.
    pub api_url: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            api_url: "https://pay.techrealm.pk".to_string(),
        }
    }
}

impl PaymentConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

/// A single payment-initiation attempt.
///
/// Transient: owned by the caller for the duration of the checkout
/// redirect, never persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Amount submitted to the payment service.
    pub amount: f64,
    /// Hosted checkout URL the user is redirected to.
    pub payment_link: String,
    /// Opaque correlation ID the provider echoes back on confirmation.
    pub reference: String,
    /// When this intent was created locally.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct CreatePaymentRequest {
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct CreatePaymentResponse {
    payment_link: Option<String>,
    reference: Option<String>,
}

/// Payment gateway client.
///
/// Issues a single request per call with no retries; the caller owns
/// retry and deadline policy.
pub struct PaymentClient {
    config: PaymentConfig,
    client: reqwest::Client,
}

impl PaymentClient {
    /// Create a new payment client.
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Initiate a payment and return the checkout link and reference.
    ///
    /// Fails with [`Error::InvalidAmount`] before any I/O if `amount` is
    /// not a positive finite number. Mutates no local state; the
    /// subscription flag is set later by the confirmation path.
    pub async fn create_payment(&self, amount: f64) -> Result<PaymentIntent> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        let url = format!("{}/create-payment", self.config.api_url);
        info!(amount = amount, "Creating payment");

        let response = self
            .client
            .post(&url)
            .json(&CreatePaymentRequest { amount })
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Payment request failed in transport");
                Error::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            error!(status = %status, "Payment service returned an error");
            return Err(Error::PaymentService(reason));
        }

        let body: CreatePaymentResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        let payment_link = match body.payment_link {
            Some(link) if !link.is_empty() => link,
            _ => {
                warn!("Payment response missing payment_link");
                return Err(Error::MalformedResponse(
                    "missing payment_link in response".to_string(),
                ));
            }
        };
        let reference = match body.reference {
            Some(reference) if !reference.is_empty() => reference,
            _ => {
                warn!("Payment response missing reference");
                return Err(Error::MalformedResponse(
                    "missing reference in response".to_string(),
                ));
            }
        };

        info!(reference = %reference, "Payment created");
        Ok(PaymentIntent {
            amount,
            payment_link,
            reference,
            created_at: Utc::now(),
        })
    }
}
