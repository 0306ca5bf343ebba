//! MercadoPago-style gateway family.
//!
//! Card scheme rule: 16 ASCII digits with a leading `5`. References are
//! prefixed `MPG`.

use std::sync::Arc;

use async_trait::async_trait;
use gateways_types::{
    Amount, AuditSink, CardNumber, CardValidator, GatewayPipeline, GatewaySelector, LogEntry,
    PaymentGateway, ProcessorError, TransactionLogger, TransactionProcessor, TransactionReference,
    TransactionResult,
};

pub(crate) const FAMILY: GatewaySelector = GatewaySelector::MercadoPago;

const REFERENCE_PREFIX: &str = "MPG";

struct Validator;

impl CardValidator for Validator {
    fn validate(&self, card: &CardNumber) -> bool {
        let raw = card.as_str();
        raw.len() == 16 && raw.starts_with('5') && raw.bytes().all(|b| b.is_ascii_digit())
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
        tracing::debug!(%amount, card = %card, %reference, "mercadopago processing transaction");
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
    fn test_leading_five_is_required() {
        assert!(Validator.validate(&CardNumber::new("5234567890123456")));
        assert!(!Validator.validate(&CardNumber::new("1234567890123456")));
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        assert!(!Validator.validate(&CardNumber::new("523456789012345")));
    }

    #[test]
    fn test_non_digits_are_invalid() {
        assert!(!Validator.validate(&CardNumber::new("5234x67890123456")));
    }
}
