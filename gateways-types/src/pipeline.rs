//! The validate -> process -> log pipeline.
//!
//! Written once, generic over the three family ports, and shared by every
//! gateway family. A family assembles the pipeline from its own private
//! components, which is what makes cross-family mixing structurally
//! impossible rather than merely discouraged.

use crate::domain::{DeclineReason, GatewaySelector, PaymentOutcome, PaymentRequest};
use crate::ports::{CardValidator, PaymentGateway, TransactionLogger, TransactionProcessor};

/// One gateway family's orchestration: validator, processor and logger
/// from the same family, invoked in strict sequence.
///
/// The sequence per payment:
/// 1. Validate. On refusal the processor and logger are never invoked.
/// 2. Process. A processor failure becomes a definite `Rejected` outcome;
///    the logger is not invoked for a transaction that did not complete.
/// 3. Log the confirmation and return `Succeeded` with the reference.
pub struct GatewayPipeline<V, P, L> {
    family: GatewaySelector,
    validator: V,
    processor: P,
    logger: L,
}

impl<V, P, L> GatewayPipeline<V, P, L>
where
    V: CardValidator,
    P: TransactionProcessor,
    L: TransactionLogger,
{
    pub fn new(family: GatewaySelector, validator: V, processor: P, logger: L) -> Self {
        Self {
            family,
            validator,
            processor,
            logger,
        }
    }
}

#[async_trait::async_trait]
impl<V, P, L> PaymentGateway for GatewayPipeline<V, P, L>
where
    V: CardValidator,
    P: TransactionProcessor,
    L: TransactionLogger,
{
    fn family(&self) -> GatewaySelector {
        self.family
    }

    async fn process_payment(&self, request: &PaymentRequest) -> PaymentOutcome {
        if !self.validator.validate(request.card_number()) {
            return PaymentOutcome::Rejected {
                reason: DeclineReason::InvalidCard,
            };
        }

        match self
            .processor
            .process(request.amount(), request.card_number())
            .await
        {
            Ok(result) => {
                self.logger.log(&format!(
                    "payment of {} with card {} confirmed, reference {}",
                    request.amount(),
                    request.card_number(),
                    result.reference
                ));
                PaymentOutcome::Succeeded {
                    reference: result.reference,
                }
            }
            Err(err) => PaymentOutcome::Rejected {
                reason: DeclineReason::ProcessorFailure(err.to_string()),
            },
        }
    }
}
