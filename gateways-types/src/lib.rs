//! # Gateways Types
//!
//! Domain types, port traits and the dispatch pipeline for the payment
//! gateway service. This crate has ZERO external IO dependencies - only
//! data structures, business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Amount, CardNumber, PaymentRequest, ...)
//! - `ports/` - Trait definitions that gateway adapters must implement
//! - `pipeline/` - The validate -> process -> log orchestration, written
//!   once and shared by every gateway family
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod pipeline;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Amount, CardNumber, DeclineReason, GatewaySelector, LogEntry, PaymentOutcome, PaymentRequest,
    TransactionReference, TransactionResult,
};
pub use dto::*;
pub use error::{AppError, DomainError, GatewayError};
pub use pipeline::GatewayPipeline;
pub use ports::{
    AuditSink, CardValidator, GatewayFactory, PaymentGateway, ProcessorError, TransactionLogger,
    TransactionProcessor,
};
