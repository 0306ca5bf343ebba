//! # Gateways Providers
//!
//! Concrete gateway family implementations (adapters) for the dispatch
//! service, plus the selector registry that produces them.
//!
//! Each family module owns a private validator/processor/logger triple and
//! exposes only a build function returning the assembled gateway. The only
//! way to obtain a gateway is through the registry, so a caller can never
//! pair one family's validator with another family's processor.

use std::collections::HashMap;
use std::sync::Arc;

use gateways_types::{AuditSink, GatewayError, GatewayFactory, GatewaySelector, PaymentGateway};

pub mod audit;

mod mercadopago;
mod pagseguro;
mod stripe;


pub use audit::{MemoryAuditSink, TracingAuditSink};

/// Builds one assembled gateway for a family, writing audit entries to the
/// given sink.
pub type BuildFn = fn(Arc<dyn AuditSink>) -> Box<dyn PaymentGateway>;

/// Selector -> factory registry.
///
/// Built once at startup; looked up at dispatch time. Adding a gateway
/// family means one new module and one `register` call - no existing
/// family's code, nor the dispatcher, changes.
pub struct GatewayRegistry {
    sink: Arc<dyn AuditSink>,
    builders: HashMap<GatewaySelector, BuildFn>,
}

impl GatewayRegistry {
    /// Starts an empty registry writing audit entries to `sink`.
    pub fn builder(sink: Arc<dyn AuditSink>) -> GatewayRegistryBuilder {
        GatewayRegistryBuilder {
            sink,
            builders: HashMap::new(),
        }
    }

    /// A registry with every in-tree family registered.
    pub fn with_defaults(sink: Arc<dyn AuditSink>) -> Self {
        Self::builder(sink)
            .register(pagseguro::FAMILY, pagseguro::build)
            .register(mercadopago::FAMILY, mercadopago::build)
            .register(stripe::FAMILY, stripe::build)
            .build()
    }
}

/// Builder for a `GatewayRegistry`.
pub struct GatewayRegistryBuilder {
    sink: Arc<dyn AuditSink>,
    builders: HashMap<GatewaySelector, BuildFn>,
}

impl GatewayRegistryBuilder {
    /// Registers a family. Re-registering a selector replaces its builder.
    pub fn register(mut self, selector: GatewaySelector, build: BuildFn) -> Self {
        self.builders.insert(selector, build);
        self
    }

    pub fn build(self) -> GatewayRegistry {
        GatewayRegistry {
            sink: self.sink,
            builders: self.builders,
        }
    }
}

impl GatewayFactory for GatewayRegistry {
    fn create(&self, selector: GatewaySelector) -> Result<Box<dyn PaymentGateway>, GatewayError> {
        let build = self
            .builders
            .get(&selector)
            .ok_or_else(|| GatewayError::UnsupportedGateway(selector.to_string()))?;
        Ok(build(self.sink.clone()))
    }

    fn registered(&self) -> Vec<GatewaySelector> {
        let mut selectors: Vec<_> = self.builders.keys().copied().collect();
        selectors.sort_by_key(|s| s.as_str());
        selectors
    }
}
