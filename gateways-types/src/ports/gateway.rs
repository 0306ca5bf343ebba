//! Gateway family ports.
//!
//! A gateway family is a matched triple of these three capabilities plus
//! the `PaymentGateway` entry point that orchestrates them. Families keep
//! their component types private and expose only the assembled gateway, so
//! a validator from one family can never be paired with another family's
//! processor.

use crate::domain::{
    Amount, CardNumber, GatewaySelector, PaymentOutcome, PaymentRequest, TransactionResult,
};

/// Decides whether a presented card identifier is acceptable for a family.
///
/// A pure predicate: malformed input is simply invalid, never an error.
pub trait CardValidator: Send + Sync {
    fn validate(&self, card: &CardNumber) -> bool;
}

/// Error type for transaction processing.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),

    #[error("Declined by provider: {0}")]
    Declined(String),
}

/// Turns a validated amount + card identifier into a confirmation
/// reference.
///
/// Precondition: the family's validator has already accepted this card
/// identifier. The pipeline enforces this; implementations do not
/// re-check. The async boundary is the natural extension point for
/// retry/timeout policy.
#[async_trait::async_trait]
pub trait TransactionProcessor: Send + Sync {
    async fn process(
        &self,
        amount: Amount,
        card: &CardNumber,
    ) -> Result<TransactionResult, ProcessorError>;
}

/// Records a human-readable audit line for a completed transaction.
///
/// Infallible from the caller's perspective: sink failures must be
/// swallowed or buffered, never propagated into the payment outcome.
pub trait TransactionLogger: Send + Sync {
    fn log(&self, message: &str);
}

/// The gateway family contract: the uniform "process payment" entry point.
///
/// Implementations run validate -> process -> log to completion and always
/// return a definite outcome; no error leaves this boundary.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// The family this gateway belongs to.
    fn family(&self) -> GatewaySelector;

    /// Routes one payment through this family's triple.
    async fn process_payment(&self, request: &PaymentRequest) -> PaymentOutcome;
}
