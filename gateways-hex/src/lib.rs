//! # Gateways Hex
//!
//! Application service layer and HTTP adapter for the gateway dispatch
//! service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (resolves a selector to a gateway
//!   and forwards the payment)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `F: GatewayFactory`, allowing different
//! factory implementations to be injected.

pub mod inbound;
mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::DispatchService;
