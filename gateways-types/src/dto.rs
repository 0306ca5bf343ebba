//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{PaymentOutcome, TransactionReference};

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to route one payment through a gateway family.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DispatchRequest {
    /// Gateway family name. Unknown names are a hard error, not a
    /// rejected payment.
    #[schema(example = "stripe")]
    pub gateway: String,
    /// Amount in smallest currency unit (cents)
    #[schema(example = 15000)]
    pub amount: i64,
    /// Card identifier to validate and charge
    #[schema(example = "1234567890123456")]
    pub card_number: String,
}

/// Terminal status of a dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchStatus {
    Succeeded,
    Rejected,
}

/// Response for a dispatched payment.
///
/// Both outcomes are 200-level responses; only an unknown gateway is an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DispatchResponse {
    pub status: DispatchStatus,
    /// Confirmation reference, present when the payment succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "STR-9f8a6c2e4b0d4f719c3a5e8b7d6f1a2c")]
    pub reference: Option<TransactionReference>,
    /// Decline reason, present when the payment was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "card rejected by validator")]
    pub reason: Option<String>,
}

impl From<PaymentOutcome> for DispatchResponse {
    fn from(outcome: PaymentOutcome) -> Self {
        match outcome {
            PaymentOutcome::Succeeded { reference } => Self {
                status: DispatchStatus::Succeeded,
                reference: Some(reference),
                reason: None,
            },
            PaymentOutcome::Rejected { reason } => Self {
                status: DispatchStatus::Rejected,
                reference: None,
                reason: Some(reason.to_string()),
            },
        }
    }
}
