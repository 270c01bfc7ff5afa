#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pantry_api::{app_router, apply_schema, connect_in_memory, AppState, Catalog, Settings};
use serde_json::{json, Value};
use tower::ServiceExt;

pub async fn app() -> Router {
    let pool = connect_in_memory().await.unwrap();
    let catalog = Catalog::builtin().unwrap();
    apply_schema(&pool, &catalog).await.unwrap();
    app_router(AppState::new(pool, catalog), &Settings::default())
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Request with an explicit (possibly absent) content type and a raw body.
/// Returns the status, the response content type and the parsed JSON body.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Option<String>, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let response_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, response_type, value)
}

/// Label used in the update confirmation. Purchase history drops the "entry" suffix there.
pub fn updated_label(path: &str, label: &'static str) -> &'static str {
    if path == "purchase_history" {
        "Purchase history"
    } else {
        label
    }
}

/// A complete payload (every column) for each resource, with values that read back unchanged.
pub fn sample_payloads() -> Vec<(&'static str, &'static str, Value)> {
    vec![
        (
            "food_items",
            "Food item",
            json!({"name": "Milk", "category_id": 1, "storage_location_id": 2, "quantity": 2, "unit": "L", "expiry_date": "2024-07-01"}),
        ),
        ("categories", "Category", json!({"name": "Dairy"})),
        ("storage_locations", "Storage location", json!({"name": "Fridge"})),
        (
            "stores",
            "Store",
            json!({"name": "Green Grocer", "address": "12 Market St", "website": "https://greengrocer.example"}),
        ),
        (
            "store_prices",
            "Store price",
            json!({"store_id": 1, "food_item_id": 1, "price": 1.49, "date": "2024-06-01", "unit": "L"}),
        ),
        (
            "purchase_history",
            "Purchase history entry",
            json!({"store_id": 1, "food_item_id": 1, "quantity": 3, "price": 4.47, "date": "2024-06-01", "notes": "weekly shop"}),
        ),
        (
            "shopping_list",
            "Shopping list item",
            json!({"food_item_id": 1, "quantity": 2, "unit": "L", "priority": 2, "completed": false}),
        ),
        (
            "recipes",
            "Recipe",
            json!({"name": "Pancakes", "description": "Fluffy", "instructions": "Mix and fry", "prep_time": 10, "cook_time": 15, "servings": 4}),
        ),
        (
            "recipe_ingredients",
            "Recipe ingredient",
            json!({"recipe_id": 1, "food_item_id": 1, "quantity": 0.5, "unit": "L", "notes": "whole milk"}),
        ),
        (
            "recipe_shopping_checklist",
            "Recipe shopping checklist item",
            json!({"recipe_id": 1, "ingredient_id": 1, "quantity": 0.25, "unit": "L", "completed": true}),
        ),
        (
            "expenses",
            "Expense",
            json!({"store_id": 1, "food_item_id": null, "amount": 12, "date": "2024-06-01", "category": "groceries", "notes": null}),
        ),
        (
            "home_cooked_meals",
            "Home cooked meal",
            json!({"recipe_id": 1, "name": "Sunday pancakes", "date": "2024-06-02", "notes": "kids loved it", "rating": 5}),
        ),
        (
            "eating_out_expenses",
            "Eating out expense",
            json!({"store_id": 1, "amount": 23.5, "date": "2024-06-03", "notes": "pizza", "rating": 4}),
        ),
    ]
}

/// Same payload with every string field changed, for full-row update checks.
pub fn edited(payload: &Value) -> Value {
    let mut out = payload.clone();
    if let Value::Object(map) = &mut out {
        for v in map.values_mut() {
            if let Value::String(s) = v {
                s.push_str(" (edited)");
            }
        }
    }
    out
}

pub fn with_id(payload: &Value, id: i64) -> Value {
    let mut out = payload.clone();
    if let Value::Object(map) = &mut out {
        map.insert("id".into(), json!(id));
    }
    out
}
