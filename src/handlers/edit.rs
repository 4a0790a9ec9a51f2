use crate::error::{ApiError, ErrorResponse};
use crate::models::{MensajeResponse, Route};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json, extract::Path, extract::State, extract::rejection::JsonRejection, http::StatusCode,
};

/// PUT /editar_ruta/:id handler - Replace a route
///
/// Whole-record replacement of the first route matching the path id; the
/// stored id always ends up equal to the path id, whatever the payload said.
/// When nothing matches the store is left untouched.
#[utoipa::path(
    put,
    path = routes::EDITAR_RUTA,
    params(
        ("id" = u64, Path, description = "Integer id of the route to replace")
    ),
    request_body = Route,
    responses(
        (status = 200, description = "Route replaced", body = MensajeResponse),
        (status = 400, description = "Body absent or not a record object", body = ErrorResponse),
        (status = 404, description = "No route with that id", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "rutas"
)]
pub async fn edit_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<Route>, JsonRejection>,
) -> Result<(StatusCode, Json<MensajeResponse>), ApiError> {
    let Json(route) = payload.map_err(|_| ApiError::InvalidBody)?;

    if !state.store.replace(id, route).await? {
        tracing::info!("Route not found for edit: {}", id);
        return Err(ApiError::RouteNotFound(id));
    }

    tracing::info!("Updated route with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(MensajeResponse {
            mensaje: format!("Ruta con ID {id} actualizada"),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorResponse;
    use crate::handlers::testing::{data_file, setup_test_app};
    use crate::models::{MensajeResponse, Route};
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn add_route(app: &axum::Router, body: serde_json::Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/agregar_ruta")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    async fn stored_routes(app: &axum::Router) -> Vec<Route> {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/rutas")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_edit_replaces_whole_record_and_forces_id() {
        let (_dir, app) = setup_test_app();
        add_route(
            &app,
            serde_json::json!({"nombre": "Ruta Centro", "tarifa": 2.5}),
        )
        .await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/editar_ruta/1")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"id": 99, "nombre": "Ruta Centro Exprés"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let confirmation: MensajeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(confirmation.mensaje, "Ruta con ID 1 actualizada");

        let routes = stored_routes(&app).await;
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].id, Some(1));
        assert_eq!(routes[0].nombre.as_deref(), Some("Ruta Centro Exprés"));
        // Replacement, not merge: old passthrough fields are gone
        assert!(routes[0].extra.is_empty());
    }

    #[tokio::test]
    async fn test_edit_not_found_has_no_side_effect() {
        let (dir, app) = setup_test_app();
        add_route(&app, serde_json::json!({"nombre": "Ruta Centro"})).await;

        let before = std::fs::read(data_file(&dir)).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/editar_ruta/7")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"nombre": "Ruta Fantasma"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "Ruta no encontrada");

        assert_eq!(std::fs::read(data_file(&dir)).unwrap(), before);
    }

    #[tokio::test]
    async fn test_edit_invalid_body() {
        let (_dir, app) = setup_test_app();
        add_route(&app, serde_json::json!({"nombre": "Ruta Centro"})).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/editar_ruta/1")
                    .header("content-type", "application/json")
                    .body(Body::from("[\"not\", \"an\", \"object\"]"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
