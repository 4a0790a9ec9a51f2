use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{MensajeResponse, Route, SearchQuery};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rutas-service API",
        version = "1.0.0",
        description = "A minimal transport-route record service backed by a flat JSON file"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::add::add_handler,
        handlers::delete::delete_handler,
        handlers::edit::edit_handler,
        handlers::search::search_handler
    ),
    components(
        schemas(
            Route,
            MensajeResponse,
            SearchQuery,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "rutas", description = "Transport route record operations")
    )
)]
pub struct ApiDoc;
