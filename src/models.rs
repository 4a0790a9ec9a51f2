use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// A single transport route record
///
/// Only `id`, `nombre` and `sindicato` carry semantics (id assignment and
/// search); every other field the caller sends lands in `extra` and is
/// persisted and returned unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Route {
    /// Integer identifier assigned by the store; caller-supplied values are
    /// overwritten on create and forced to the path id on edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Route name, matched by the search endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    /// Operating union/cooperative, matched by the search endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sindicato: Option<String>,
    /// Opaque passthrough payload
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, JsonValue>,
}

/// Response type for successful mutating operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MensajeResponse {
    pub mensaje: String,
}

/// Query parameters for the search endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SearchQuery {
    pub nombre: Option<String>,
    pub sindicato: Option<String>,
}
