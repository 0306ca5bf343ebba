//! DispatchService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use gateways_types::{
        Amount, AppError, CardNumber, CardValidator, DeclineReason, GatewayError, GatewayFactory,
        GatewayPipeline, GatewaySelector, PaymentGateway, PaymentOutcome, PaymentRequest,
        ProcessorError, TransactionLogger, TransactionProcessor, TransactionReference,
        TransactionResult,
    };

    use crate::DispatchService;

    /// Validator that counts invocations and accepts or refuses everything.
    struct CountingValidator {
        accept: bool,
        calls: Arc<AtomicUsize>,
    }

    impl CardValidator for CountingValidator {
        fn validate(&self, _card: &CardNumber) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.accept
        }
    }

    /// Processor that counts invocations and optionally fails.
    struct CountingProcessor {
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TransactionProcessor for CountingProcessor {
        async fn process(
            &self,
            _amount: Amount,
            _card: &CardNumber,
        ) -> Result<TransactionResult, ProcessorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ProcessorError::Unavailable("connection reset".into()));
            }
            Ok(TransactionResult::new(TransactionReference::generate(
                "TST",
            )))
        }
    }

    struct CountingLogger {
        calls: Arc<AtomicUsize>,
    }

    impl TransactionLogger for CountingLogger {
        fn log(&self, _message: &str) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Factory producing pipelines assembled from the counting mocks.
    struct MockFactory {
        accept: bool,
        fail_processor: bool,
        validator_calls: Arc<AtomicUsize>,
        processor_calls: Arc<AtomicUsize>,
        logger_calls: Arc<AtomicUsize>,
    }

    impl MockFactory {
        fn new(accept: bool, fail_processor: bool) -> Self {
            Self {
                accept,
                fail_processor,
                validator_calls: Arc::new(AtomicUsize::new(0)),
                processor_calls: Arc::new(AtomicUsize::new(0)),
                logger_calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn counts(&self) -> (usize, usize, usize) {
            (
                self.validator_calls.load(Ordering::SeqCst),
                self.processor_calls.load(Ordering::SeqCst),
                self.logger_calls.load(Ordering::SeqCst),
            )
        }
    }

    impl GatewayFactory for MockFactory {
        fn create(
            &self,
            selector: GatewaySelector,
        ) -> Result<Box<dyn PaymentGateway>, GatewayError> {
            Ok(Box::new(GatewayPipeline::new(
                selector,
                CountingValidator {
                    accept: self.accept,
                    calls: self.validator_calls.clone(),
                },
                CountingProcessor {
                    fail: self.fail_processor,
                    calls: self.processor_calls.clone(),
                },
                CountingLogger {
                    calls: self.logger_calls.clone(),
                },
            )))
        }

        fn registered(&self) -> Vec<GatewaySelector> {
            vec![GatewaySelector::Stripe]
        }
    }

    /// Factory with nothing registered.
    struct EmptyFactory;

    impl GatewayFactory for EmptyFactory {
        fn create(
            &self,
            selector: GatewaySelector,
        ) -> Result<Box<dyn PaymentGateway>, GatewayError> {
            Err(GatewayError::UnsupportedGateway(selector.to_string()))
        }

        fn registered(&self) -> Vec<GatewaySelector> {
            Vec::new()
        }
    }

    fn request() -> PaymentRequest {
        PaymentRequest::new(
            Amount::new(15000).unwrap(),
            CardNumber::new("1234567890123456"),
        )
    }

    #[tokio::test]
    async fn test_valid_card_runs_the_full_pipeline() {
        let service = DispatchService::new(MockFactory::new(true, false));

        let outcome = service
            .dispatch(GatewaySelector::Stripe, request())
            .await
            .unwrap();

        assert!(outcome.is_succeeded());
        assert!(outcome.reference().unwrap().as_str().starts_with("TST-"));
        assert_eq!(service.factory().counts(), (1, 1, 1));
    }

    #[tokio::test]
    async fn test_rejected_card_invokes_neither_processor_nor_logger() {
        let service = DispatchService::new(MockFactory::new(false, false));

        let outcome = service
            .dispatch(GatewaySelector::PagSeguro, request())
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            PaymentOutcome::Rejected {
                reason: DeclineReason::InvalidCard
            }
        ));
        assert_eq!(service.factory().counts(), (1, 0, 0));
    }

    #[tokio::test]
    async fn test_processor_failure_becomes_a_rejected_outcome() {
        let service = DispatchService::new(MockFactory::new(true, true));

        let outcome = service
            .dispatch(GatewaySelector::Stripe, request())
            .await
            .unwrap();

        match outcome {
            PaymentOutcome::Rejected {
                reason: DeclineReason::ProcessorFailure(detail),
            } => assert!(detail.contains("connection reset")),
            other => panic!("expected processor-failure rejection, got {:?}", other),
        }
        // The logger never sees a transaction that did not complete.
        assert_eq!(service.factory().counts(), (1, 1, 0));
    }

    #[tokio::test]
    async fn test_unresolvable_selector_is_an_app_error() {
        let service = DispatchService::new(EmptyFactory);

        let result = service.dispatch(GatewaySelector::Stripe, request()).await;

        assert!(matches!(
            result,
            Err(AppError::UnsupportedGateway(name)) if name == "stripe"
        ));
    }

    #[tokio::test]
    async fn test_gateways_lists_what_the_factory_registered() {
        let service = DispatchService::new(MockFactory::new(true, false));
        assert_eq!(service.gateways(), vec![GatewaySelector::Stripe]);

        let empty = DispatchService::new(EmptyFactory);
        assert!(empty.gateways().is_empty());
    }
}
