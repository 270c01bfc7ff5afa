//! Pantry API: food inventory REST backend on an embedded SQLite database.
//!
//! Every table in the catalog gets the same five operations (list, get, create, full-row
//! update, delete) through one generic [`CrudService`] driven by a [`ResourceDef`].

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Catalog, ColumnDef, ColumnType, ResourceDef, Settings};
pub use error::{AppError, ConfigError};
pub use migration::apply_schema;
pub use routes::{app_router, catalog_routes, common_routes, resource_routes};
pub use service::{CrudService, WriteOutcome};
pub use state::AppState;
pub use store::{connect, connect_in_memory};
