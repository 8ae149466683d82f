//! HTTP error mapping to `{"error": ...}` bodies

use crate::contract::CampError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "400: Validation error")]
    pub error: String,
}

/// HTTP error response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.into(),
            },
        }
    }

    /// 400 for any rejected write input
    pub fn validation() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "400: Validation error")
    }

    /// 404 for a missing resource
    pub fn not_found(resource: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("404: {} not found", resource),
        )
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "500: Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Map domain errors to HTTP errors
pub fn map_domain_error(error: CampError) -> ApiError {
    match error {
        CampError::NotFound { resource, .. } => ApiError::not_found(&resource),
        CampError::Validation { .. } => ApiError::validation(),
        CampError::Internal => ApiError::internal(),
    }
}
