use crate::error::{ApiError, ErrorResponse};
use crate::models::MensajeResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// DELETE /eliminar_ruta/:id handler - Delete a route
///
/// Removes every record carrying the given id (at most one under the store's
/// assignment scheme, but defined as remove-all-matching).
#[utoipa::path(
    delete,
    path = routes::ELIMINAR_RUTA,
    params(
        ("id" = u64, Path, description = "Integer id of the route to delete")
    ),
    responses(
        (status = 200, description = "Route deleted", body = MensajeResponse),
        (status = 404, description = "No route with that id", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "rutas"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<(StatusCode, Json<MensajeResponse>), ApiError> {
    if !state.store.remove(id).await? {
        tracing::info!("Route not found for delete: {}", id);
        return Err(ApiError::RouteNotFound(id));
    }

    tracing::info!("Deleted route with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(MensajeResponse {
            mensaje: format!("Ruta con ID {id} eliminada"),
        }),
    ))
}
