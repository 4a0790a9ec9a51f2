pub mod add;
pub mod delete;
pub mod edit;
pub mod health;
pub mod list;
pub mod search;

pub use add::add_handler;
pub use delete::delete_handler;
pub use edit::edit_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use search::search_handler;


#[cfg(test)]
mod scenario_tests {
    use super::testing::setup_test_app;
    use crate::models::Route;
    use axum::{Router, body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn request(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let (_dir, app) = setup_test_app();

        // Empty store lists as an empty array
        let (status, body) = request(&app, "GET", "/rutas", None).await;
        assert_eq!(status, StatusCode::OK);
        let routes: Vec<Route> = serde_json::from_slice(&body).unwrap();
        assert!(routes.is_empty());

        // First add gets id 1
        let (status, _) = request(
            &app,
            "POST",
            "/agregar_ruta",
            Some(serde_json::json!({"nombre": "Ruta Centro", "sindicato": "Union A"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = request(&app, "GET", "/rutas", None).await;
        let routes: Vec<Route> = serde_json::from_slice(&body).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].id, Some(1));

        // Second add gets id 2
        let (status, _) = request(
            &app,
            "POST",
            "/agregar_ruta",
            Some(serde_json::json!({"nombre": "Ruta Norte", "sindicato": "Union B"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        // Delete id 1 leaves only id 2
        let (status, _) = request(&app, "DELETE", "/eliminar_ruta/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = request(&app, "GET", "/rutas", None).await;
        let routes: Vec<Route> = serde_json::from_slice(&body).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].id, Some(2));

        // Search finds the survivor case-insensitively
        let (status, body) =
            request(&app, "GET", "/buscar_rutas?nombre=norte&sindicato=zzz", None).await;
        assert_eq!(status, StatusCode::OK);
        let matches: Vec<Route> = serde_json::from_slice(&body).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, Some(2));
    }
}
