//! Stripe-style gateway family.
//!
//! Accepts 16 ASCII digits. References are prefixed `STR`.

use std::sync::Arc;

use async_trait::async_trait;
use gateways_types::{
    Amount, AuditSink, CardNumber, CardValidator, GatewayPipeline, GatewaySelector, LogEntry,
    PaymentGateway, ProcessorError, TransactionLogger, TransactionProcessor, TransactionReference,
    TransactionResult,
};

pub(crate) const FAMILY: GatewaySelector = GatewaySelector::Stripe;

const REFERENCE_PREFIX: &str = "STR";

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
        tracing::debug!(%amount, card = %card, %reference, "stripe processing transaction");
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
