//! PagSeguro-style gateway family.
//!
//! Accepts any card identifier of exactly 16 ASCII digits. References are
//! prefixed `PSG`.

use std::sync::Arc;

use async_trait::async_trait;
use gateways_types::{
    Amount, AuditSink, CardNumber, CardValidator, GatewayPipeline, GatewaySelector, LogEntry,
    PaymentGateway, ProcessorError, TransactionLogger, TransactionProcessor, TransactionReference,
    TransactionResult,
};

pub(crate) const FAMILY: GatewaySelector = GatewaySelector::PagSeguro;

const REFERENCE_PREFIX: &str = "PSG";

struct Validator;

impl CardValidator for Validator {
    fn validate(&self, card: &CardNumber) -> bool {
        let raw = card.as_str();
        raw.len() == 16 && raw.bytes().all(|b| b.is_ascii_digit())
    }
}

struct Processor;

#[async_trait]
impl TransactionProcessor for Processor {
    async fn process(
        &self,
        amount: Amount,
        card: &CardNumber,
    ) -> Result<TransactionResult, ProcessorError> {
        let reference = TransactionReference::generate(REFERENCE_PREFIX);
        tracing::debug!(%amount, card = %card, %reference, "pagseguro processing transaction");
        Ok(TransactionResult::new(reference))
    }
}

struct Logger {
    sink: Arc<dyn AuditSink>,
}

impl TransactionLogger for Logger {
    fn log(&self, message: &str) {
        self.sink.append(LogEntry::new(FAMILY, message));
    }
}

/// Assembles this family's gateway. The components above never leave this
/// module unassembled.
pub(crate) fn build(sink: Arc<dyn AuditSink>) -> Box<dyn PaymentGateway> {
    Box::new(GatewayPipeline::new(
        FAMILY,
        Validator,
        Processor,
        Logger { sink },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_digits_are_valid() {
        assert!(Validator.validate(&CardNumber::new("1234567890123456")));
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        assert!(!Validator.validate(&CardNumber::new("123456789012345")));
        assert!(!Validator.validate(&CardNumber::new("12345678901234567")));
    }

    #[test]
    fn test_non_digits_are_invalid() {
        assert!(!Validator.validate(&CardNumber::new("1234-5678-9012-34")));
        assert!(!Validator.validate(&CardNumber::new("")));
    }
}
