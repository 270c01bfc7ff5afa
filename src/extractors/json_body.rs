//! JSON request body that rejects with the crate's `{ "error": ... }` shape.
//!
//! Only `application/json` (or a `+json` suffix) bodies are parsed. A request without a JSON
//! content type, or with an empty body, carries an empty object, so its fields are all absent.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
};
use serde_json::{Map, Value};

#[derive(Clone, Debug)]
pub struct JsonBody(pub Value);

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(rejection.body_text())
            } else {
                AppError::BadRequest(rejection.body_text())
            }
        })?;
        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(format!("Failed to parse the request body as JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Value, AppError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/categories");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        JsonBody::from_request(req, &()).await.map(|JsonBody(v)| v)
    }

    #[tokio::test]
    async fn parses_json_bodies() {
        let v = extract(Some("application/json; charset=utf-8"), r#"{"name":"Dairy"}"#)
            .await
            .unwrap();
        assert_eq!(v, json!({ "name": "Dairy" }));
    }

    #[tokio::test]
    async fn missing_content_type_is_an_empty_object() {
        let v = extract(None, r#"{"name":"Dairy"}"#).await.unwrap();
        assert_eq!(v, json!({}));
        let v = extract(Some("text/plain"), "Dairy").await.unwrap();
        assert_eq!(v, json!({}));
    }

    #[tokio::test]
    async fn empty_json_body_is_an_empty_object() {
        let v = extract(Some("application/json"), "").await.unwrap();
        assert_eq!(v, json!({}));
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let err = extract(Some("application/json"), "{name:").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err
            .client_message()
            .starts_with("Failed to parse the request body as JSON"));
    }

    #[test]
    fn recognises_json_suffix_types() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "application/merge-patch+json".parse().unwrap());
        assert!(has_json_content_type(&headers));
        headers.insert(CONTENT_TYPE, "text/json".parse().unwrap());
        assert!(!has_json_content_type(&headers));
    }
}
