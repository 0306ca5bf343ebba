//! Error types for the gateway dispatch service.

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,
}

/// Gateway resolution errors.
///
/// The only hard-error path in the core: an unknown or unregistered
/// selector is a programming/configuration mistake, not a user-data
/// problem, so it surfaces as an error rather than a `Rejected` outcome.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Unsupported gateway: {0}")]
    UnsupportedGateway(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unsupported gateway: {0}")]
    UnsupportedGateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::UnsupportedGateway(name) => AppError::UnsupportedGateway(name),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
