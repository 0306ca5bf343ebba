//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use axum::Json;
use gateways_types::domain::{GatewaySelector, TransactionReference};
use gateways_types::dto::{DispatchRequest, DispatchResponse, DispatchStatus};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Dispatch a payment through a gateway family
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body = DispatchRequest,
    responses(
        (status = 200, description = "Definite outcome, succeeded or rejected", body = DispatchResponse),
        (status = 400, description = "Unknown gateway name or invalid amount")
    )
)]
async fn dispatch_payment() {}

/// List registered gateway families
#[utoipa::path(
    get,
    path = "/api/gateways",
    tag = "gateways",
    responses(
        (status = 200, description = "Registered gateway selectors", body = Vec<GatewaySelector>)
    )
)]
async fn list_gateways() {}

/// OpenAPI documentation for the Gateway Dispatch API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gateway Dispatch Service API",
        version = "1.0.0",
        description = "Routes a payment request to one of several interchangeable payment gateway families. The caller picks a family by name; validation rules, confirmation references and audit tagging are family-specific, the API surface is not.",
        license(name = "MIT"),
    ),
    paths(health, dispatch_payment, list_gateways),
    components(
        schemas(
            DispatchRequest,
            DispatchResponse,
            DispatchStatus,
            GatewaySelector,
            TransactionReference,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment dispatch operations"),
        (name = "gateways", description = "Gateway family discovery"),
    )
)]
pub struct ApiDoc;

/// Serves the generated document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
