//! JSON body extractor
//!
//! Like [`axum::Json`], except that a request without a JSON content type,
//! with an empty body, or whose JSON is not an object is read as
//! `T::default()` instead of being rejected. Fields are only ever taken by
//! name, never by position. The handler then reports the missing fields
//! itself. A body that is declared JSON but does not parse is a 400 with
//! the parser message.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::AppError;

pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid(rejection.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::invalid(format!("Invalid JSON body: {e}")))?;

        from_object(value).map(Self)
    }
}

/// Deserialize a JSON object; any other JSON value carries no named fields
fn from_object<T>(value: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| AppError::invalid(format!("Invalid JSON body: {e}"))),
        _ => Ok(T::default()),
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
