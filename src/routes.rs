// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const RUTAS: &str = "/rutas";
pub const AGREGAR_RUTA: &str = "/agregar_ruta";
pub const ELIMINAR_RUTA: &str = "/eliminar_ruta/{id}";
pub const EDITAR_RUTA: &str = "/editar_ruta/{id}";
pub const BUSCAR_RUTAS: &str = "/buscar_rutas";
