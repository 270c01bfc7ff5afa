//! Shared application state for all routes: the storage handle and the resource catalog.

use crate::config::Catalog;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(pool: SqlitePool, catalog: Catalog) -> Self {
        AppState {
            pool,
            catalog: Arc::new(catalog),
        }
    }
}
