//! Resource CRUD handlers: list, read, create, update, delete.
//! The resource is resolved from the first path segment against the catalog.

use crate::config::ResourceDef;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::response;
use crate::service::{CrudService, WriteOutcome};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

fn resolve(state: &AppState, path_segment: &str) -> Result<&'static ResourceDef, AppError> {
    state
        .catalog
        .resource_by_path(path_segment)
        .ok_or_else(|| AppError::UnknownResource(path_segment.to_string()))
}

/// Ids are integers; anything else cannot match a row and is reported as the resource's not-found.
fn parse_id(resource: &ResourceDef, id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(resource.not_found_message()))
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &path_segment)?;
    let rows = CrudService::list(&state.pool, resource).await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &path_segment)?;
    let id = parse_id(resource, &id_str)?;
    let row = CrudService::read(&state.pool, resource, id)
        .await?
        .ok_or_else(|| AppError::NotFound(resource.not_found_message()))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &path_segment)?;
    let body = body_to_map(body)?;
    let id = CrudService::create(&state.pool, resource, &body).await?;
    tracing::info!(resource = resource.path_segment, id, "created");
    Ok(response::created(id))
}

pub async fn update(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &path_segment)?;
    let id = parse_id(resource, &id_str)?;
    let body = body_to_map(body)?;
    match CrudService::update(&state.pool, resource, id, &body).await? {
        WriteOutcome::NotFound => Err(AppError::NotFound(resource.not_found_message())),
        _ => Ok(response::message(resource.updated_message())),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resolve(&state, &path_segment)?;
    let id = parse_id(resource, &id_str)?;
    match CrudService::delete(&state.pool, resource, id).await? {
        WriteOutcome::NotFound => Err(AppError::NotFound(resource.not_found_message())),
        _ => {
            tracing::info!(resource = resource.path_segment, id, "deleted");
            Ok(response::message(resource.deleted_message()))
        }
    }
}
