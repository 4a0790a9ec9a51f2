use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// automatically mapping different error types to appropriate HTTP status codes
/// and formatting them as JSON responses. Store I/O and parse failures have no
/// dedicated category; they all surface as a 500 with the same body shape.
#[derive(Debug)]
pub enum ApiError {
    /// Request body absent or not a valid record object
    InvalidBody,
    /// No route with the given id
    RouteNotFound(u64),
    /// Store read/write/parse failure
    StoreError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                "No se proporcionaron datos".to_string(),
            ),
            ApiError::RouteNotFound(id) => {
                tracing::debug!("No route with id: {}", id);
                (StatusCode::NOT_FOUND, "Ruta no encontrada".to_string())
            }
            ApiError::StoreError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Store error: {err}"),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreError(err)
    }
}
