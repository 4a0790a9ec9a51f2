use crate::error::{ApiError, ErrorResponse};
use crate::models::{Route, SearchQuery};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Query, extract::State, http::StatusCode};

/// GET /buscar_rutas handler - Search routes
///
/// Matches routes whose `nombre` contains the `nombre` query OR whose
/// `sindicato` contains the `sindicato` query, case-insensitively. Absent
/// query parameters default to the empty string, which matches everything, so
/// a bare request returns the full collection.
#[utoipa::path(
    get,
    path = routes::BUSCAR_RUTAS,
    params(
        ("nombre" = Option<String>, Query, description = "Substring to match against route names"),
        ("sindicato" = Option<String>, Query, description = "Substring to match against operating unions")
    ),
    responses(
        (status = 200, description = "Matching routes", body = Vec<Route>),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "rutas"
)]
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(StatusCode, Json<Vec<Route>>), ApiError> {
    let nombre = query.nombre.as_deref().unwrap_or("");
    let sindicato = query.sindicato.as_deref().unwrap_or("");

    let matches = state.store.search(nombre, sindicato).await?;

    tracing::info!(
        "Search matched {} routes (nombre: {:?}, sindicato: {:?})",
        matches.len(),
        nombre,
        sindicato
    );
    Ok((StatusCode::OK, Json(matches)))
}
