use crate::config::Config;
use crate::store::RouteStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: RouteStore,
    pub config: Arc<Config>,
}
