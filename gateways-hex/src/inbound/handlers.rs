//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use gateways_types::{
    Amount, AppError, CardNumber, DispatchRequest, DispatchResponse, GatewayFactory,
    GatewaySelector, PaymentRequest,
};

use crate::DispatchService;

/// Application state shared across handlers.
pub struct AppState<F: GatewayFactory> {
    pub service: DispatchService<F>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnsupportedGateway(name) => (
                StatusCode::BAD_REQUEST,
                format!("Unsupported gateway: {}", name),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Route one payment through the selected gateway family.
///
/// Both outcomes are 200 responses; only an unknown gateway name or a
/// negative amount is an error.
#[tracing::instrument(skip(state, req), fields(gateway = %req.gateway, amount = req.amount))]
pub async fn dispatch_payment<F: GatewayFactory>(
    State(state): State<Arc<AppState<F>>>,
    Json(req): Json<DispatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let selector: GatewaySelector = req.gateway.parse().map_err(AppError::from)?;
    let amount = Amount::new(req.amount).map_err(AppError::from)?;
    let request = PaymentRequest::new(amount, CardNumber::new(req.card_number));

    let outcome = state.service.dispatch(selector, request).await?;
    tracing::info!(gateway = %selector, succeeded = outcome.is_succeeded(), "payment dispatched");

    Ok(Json(DispatchResponse::from(outcome)))
}

/// List the gateway families available for dispatch.
#[tracing::instrument(skip(state))]
pub async fn list_gateways<F: GatewayFactory>(
    State(state): State<Arc<AppState<F>>>,
) -> impl IntoResponse {
    Json(state.service.gateways())
}
