//! Port traits (interfaces for gateway adapters).
//!
//! These are the contracts that gateway families must implement.
//! The application layer depends on these traits, not concrete
//! implementations.

mod audit;
mod factory;
mod gateway;

pub use audit::AuditSink;
pub use factory::GatewayFactory;
pub use gateway::{
    CardValidator, PaymentGateway, ProcessorError, TransactionLogger, TransactionProcessor,
};
