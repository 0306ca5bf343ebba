//! Gateway factory port.
//!
//! This trait defines the interface for producing fully-assembled gateway
//! instances from a selector. Implementations are registries, test
//! doubles, etc.

use crate::domain::GatewaySelector;
use crate::error::GatewayError;

use super::gateway::PaymentGateway;

/// Port trait for gateway factories.
///
/// Every call with the same selector yields a functionally-equivalent,
/// independent instance; `create` is side-effect-free.
pub trait GatewayFactory: Send + Sync + 'static {
    /// Produces a correctly-composed gateway for the selector, or
    /// `GatewayError::UnsupportedGateway` if no factory is registered.
    fn create(&self, selector: GatewaySelector) -> Result<Box<dyn PaymentGateway>, GatewayError>;

    /// Lists the selectors this factory can produce, in stable order.
    fn registered(&self) -> Vec<GatewaySelector>;
}
