//! Payment Dispatch Service
//!
//! Resolves a gateway selector through the factory port and forwards the
//! payment. Contains NO gateway-specific logic and no per-family
//! branching - any match over gateway identity in this layer is a design
//! violation.

use gateways_types::{
    AppError, GatewayFactory, GatewaySelector, PaymentGateway, PaymentOutcome, PaymentRequest,
};

/// Caller-facing entry point for routing payments.
///
/// Generic over `F: GatewayFactory` - the factory is injected at compile
/// time. This enables:
/// - Swapping registries without code changes
/// - Testing with mock factories
/// - Compile-time checks for port implementation
pub struct DispatchService<F: GatewayFactory> {
    factory: F,
}

impl<F: GatewayFactory> DispatchService<F> {
    /// Creates a new dispatch service with the given factory.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Returns a reference to the underlying factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Routes one payment through the selected gateway family.
    ///
    /// An unknown selector is the only error path; a resolved gateway
    /// always returns a definite outcome.
    pub async fn dispatch(
        &self,
        selector: GatewaySelector,
        request: PaymentRequest,
    ) -> Result<PaymentOutcome, AppError> {
        let gateway = self.factory.create(selector)?;
        Ok(gateway.process_payment(&request).await)
    }

    /// Lists the gateway families available for dispatch.
    pub fn gateways(&self) -> Vec<GatewaySelector> {
        self.factory.registered()
    }
}
