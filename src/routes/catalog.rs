//! Read-only catalog introspection: which resources exist and their columns.

use crate::config::ResourceDef;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};

async fn get_catalog(State(state): State<AppState>) -> Json<Vec<&'static ResourceDef>> {
    Json(state.catalog.resources().to_vec())
}

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/catalog", get(get_catalog))
        .with_state(state)
}
