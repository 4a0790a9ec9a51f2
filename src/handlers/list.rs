use crate::error::{ApiError, ErrorResponse};
use crate::models::Route;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /rutas handler - List all routes
///
/// Returns the full collection in insertion order. No filtering, no
/// pagination; an empty store yields an empty array.
#[utoipa::path(
    get,
    path = routes::RUTAS,
    responses(
        (status = 200, description = "All routes in store order", body = Vec<Route>),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "rutas"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Route>>), ApiError> {
    let routes = state.store.list().await?;

    tracing::info!("Listed {} routes", routes.len());
    Ok((StatusCode::OK, Json(routes)))
}
