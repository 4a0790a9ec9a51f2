use crate::error::{ApiError, ErrorResponse};
use crate::models::{MensajeResponse, Route};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// POST /agregar_ruta handler - Add a route
///
/// The store assigns the id; any id in the payload is ignored. The response
/// confirms the add but deliberately does not echo the record or the assigned
/// id back (original wire contract).
#[utoipa::path(
    post,
    path = routes::AGREGAR_RUTA,
    request_body = Route,
    responses(
        (status = 201, description = "Route added", body = MensajeResponse),
        (status = 400, description = "Body absent or not a record object", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "rutas"
)]
pub async fn add_handler(
    State(state): State<AppState>,
    payload: Result<Json<Route>, JsonRejection>,
) -> Result<(StatusCode, Json<MensajeResponse>), ApiError> {
    // Missing body, malformed JSON and non-object payloads all land here
    let Json(route) = payload.map_err(|_| ApiError::InvalidBody)?;

    let id = state.store.add(route).await?;

    tracing::info!("Added route with id: {}", id);
    Ok((
        StatusCode::CREATED,
        Json(MensajeResponse {
            mensaje: "Ruta agregada exitosamente".to_string(),
        }),
    ))
}
