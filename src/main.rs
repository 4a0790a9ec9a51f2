mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use config::Config;
use state::AppState;
use std::sync::Arc;
use store::RouteStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rutas-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = RouteStore::new(&config.data_file);
    let addr = format!("{}:{}", config.service_host, config.service_port);

    let state = AppState {
        store,
        config: Arc::new(config),
    };

    // CORS open to all origins, matching the original service
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route(routes::RUTAS, get(handlers::list_handler))
        .route(routes::AGREGAR_RUTA, post(handlers::add_handler))
        .route(routes::ELIMINAR_RUTA, delete(handlers::delete_handler))
        .route(routes::EDITAR_RUTA, put(handlers::edit_handler))
        .route(routes::BUSCAR_RUTAS, get(handlers::search_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc::ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
