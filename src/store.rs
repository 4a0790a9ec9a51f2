use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::Route;

/// Shareable JSON-file-backed route collection for use across async handlers
///
/// The whole collection lives in a single JSON file (a top-level array of
/// route objects) and is re-read on every operation; there is no cross-request
/// caching. Every operation holds the store mutex across its full
/// load-modify-save sequence, so concurrent in-process writers serialize
/// instead of losing writes. Writes are still a plain full-file rewrite, not
/// atomic: a crash mid-write can leave the file truncated.
#[derive(Clone)]
pub struct RouteStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl RouteStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Arc::new(path.as_ref().to_path_buf()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read and parse the backing file
    ///
    /// A missing file yields an empty collection. Malformed content is an
    /// error; once the file is corrupt every operation fails until it is
    /// repaired by hand.
    async fn load(&self) -> Result<Vec<Route>> {
        let bytes = match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read data file: {}", self.path.display())
                });
            }
        };

        serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse data file: {}", self.path.display()))
    }

    /// Rewrite the backing file with the full collection
    ///
    /// Pretty-printed with 2-space indentation; non-ASCII characters are
    /// written verbatim, never escaped.
    async fn save(&self, routes: &[Route]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(routes).context("Failed to serialize route data")?;

        tokio::fs::write(self.path.as_ref(), json)
            .await
            .with_context(|| format!("Failed to write data file: {}", self.path.display()))
    }

    /// All routes in insertion order
    pub async fn list(&self) -> Result<Vec<Route>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Append a route, assigning the next free id
    ///
    /// Ids are `max(existing ids) + 1`, so they stay unique even after a
    /// delete-then-add. Any id the caller supplied is overwritten.
    pub async fn add(&self, mut route: Route) -> Result<u64> {
        let _guard = self.lock.lock().await;

        let mut routes = self.load().await?;
        let id = routes
            .iter()
            .filter_map(|r| r.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .context("Route id space exhausted")?;
        route.id = Some(id);
        routes.push(route);
        self.save(&routes).await?;

        tracing::debug!("Added route with id: {}", id);
        Ok(id)
    }

    /// Remove every route with the given id
    ///
    /// Returns `false` without touching the file when nothing matched.
    pub async fn remove(&self, id: u64) -> Result<bool> {
        let _guard = self.lock.lock().await;

        let mut routes = self.load().await?;
        let before = routes.len();
        routes.retain(|r| r.id != Some(id));
        if routes.len() == before {
            return Ok(false);
        }
        self.save(&routes).await?;

        tracing::debug!("Removed route with id: {}", id);
        Ok(true)
    }

    /// Replace the first route with the given id by the supplied record
    ///
    /// Whole-record replacement, not a field merge; the stored id is forced
    /// to `id` regardless of what the replacement carried. Returns `false`
    /// without saving when no route matched.
    pub async fn replace(&self, id: u64, mut route: Route) -> Result<bool> {
        let _guard = self.lock.lock().await;

        let mut routes = self.load().await?;
        let Some(slot) = routes.iter_mut().find(|r| r.id == Some(id)) else {
            return Ok(false);
        };
        route.id = Some(id);
        *slot = route;
        self.save(&routes).await?;

        tracing::debug!("Replaced route with id: {}", id);
        Ok(true)
    }

    /// Routes whose `nombre` contains `nombre` or whose `sindicato` contains
    /// `sindicato`, case-insensitively
    ///
    /// An empty query string matches every record (substring-of-anything), and
    /// records missing a field compare as the empty string.
    pub async fn search(&self, nombre: &str, sindicato: &str) -> Result<Vec<Route>> {
        let _guard = self.lock.lock().await;

        let nombre = nombre.to_lowercase();
        let sindicato = sindicato.to_lowercase();

        let routes = self.load().await?;
        Ok(routes
            .into_iter()
            .filter(|r| {
                let r_nombre = r.nombre.as_deref().unwrap_or("").to_lowercase();
                let r_sindicato = r.sindicato.as_deref().unwrap_or("").to_lowercase();
                r_nombre.contains(&nombre) || r_sindicato.contains(&sindicato)
            })
            .collect())
    }
}
