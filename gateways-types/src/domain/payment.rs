//! Payment request, transaction reference and dispatch outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::amount::Amount;
use super::card::CardNumber;

/// A single payment to be routed through a gateway family.
///
/// Built by the caller at dispatch time and immutable for the duration of
/// the call; there is no persisted lifecycle.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    amount: Amount,
    card_number: CardNumber,
}

impl PaymentRequest {
    pub fn new(amount: Amount, card_number: CardNumber) -> Self {
        Self {
            amount,
            card_number,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn card_number(&self) -> &CardNumber {
        &self.card_number
    }
}

/// Opaque, family-prefixed token identifying a completed transaction.
///
/// The remainder after the prefix is a freshly generated UUIDv4 in simple
/// form, so references are unguessable and collisions are negligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TransactionReference(String);

impl TransactionReference {
    /// Generates a fresh reference carrying the family's prefix.
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}-{}", prefix, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a processor hands back for a completed transaction.
///
/// Success is the `Ok` of the processor's `Result`; there is no separate
/// succeeded flag.
#[derive(Debug, Clone)]
pub struct TransactionResult {
    /// The confirmation reference, unique per call
    pub reference: TransactionReference,
    /// When the processor confirmed the transaction
    pub processed_at: DateTime<Utc>,
}

impl TransactionResult {
    pub fn new(reference: TransactionReference) -> Self {
        Self {
            reference,
            processed_at: Utc::now(),
        }
    }
}

/// Why a payment was declined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclineReason {
    /// The family's validator refused the card identifier
    InvalidCard,
    /// The processor failed after validation passed
    ProcessorFailure(String),
}

impl std::fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclineReason::InvalidCard => write!(f, "card rejected by validator"),
            DeclineReason::ProcessorFailure(detail) => write!(f, "processing failed: {}", detail),
        }
    }
}

/// The definite terminal outcome of a dispatch call.
///
/// Every dispatch with a valid selector ends in one of these; neither
/// variant is an error to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Succeeded { reference: TransactionReference },
    Rejected { reason: DeclineReason },
}

impl PaymentOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, PaymentOutcome::Succeeded { .. })
    }

    /// The reference, if the payment went through.
    pub fn reference(&self) -> Option<&TransactionReference> {
        match self {
            PaymentOutcome::Succeeded { reference } => Some(reference),
            PaymentOutcome::Rejected { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_carries_prefix() {
        let reference = TransactionReference::generate("PSG");
        assert!(reference.as_str().starts_with("PSG-"));
    }

    #[test]
    fn test_references_are_unique() {
        let a = TransactionReference::generate("STR");
        let b = TransactionReference::generate("STR");
        assert_ne!(a, b);
    }

    #[test]
    fn test_outcome_accessors() {
        let reference = TransactionReference::generate("MPG");
        let outcome = PaymentOutcome::Succeeded {
            reference: reference.clone(),
        };
        assert!(outcome.is_succeeded());
        assert_eq!(outcome.reference(), Some(&reference));

        let rejected = PaymentOutcome::Rejected {
            reason: DeclineReason::InvalidCard,
        };
        assert!(!rejected.is_succeeded());
        assert_eq!(rejected.reference(), None);
    }
}
