//! Router assembly: common, catalog, and resource routes behind the middleware stack.

mod catalog;
mod common;
mod resource;

pub use catalog::catalog_routes;
pub use common::common_routes;
pub use resource::resource_routes;

use crate::config::Settings;
use crate::state::AppState;
use axum::Router;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router. Static routes take precedence over the `/:path_segment` resource routes.
pub fn app_router(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(catalog_routes(state.clone()))
        .merge(resource_routes(state))
        .layer(RequestBodyLimitLayer::new(settings.request_body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
