#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use directory_server::{Config, CredentialStore, DbService, ServerState, api};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// App over a private in-memory database
pub async fn test_app() -> (Router, ServerState) {
    let db = DbService::in_memory().await.unwrap();
    let state = ServerState::new(Config::default(), db, CredentialStore::with_defaults());
    (api::build_app(state.clone()), state)
}

/// Send a request, optionally with a JSON body, and decode the JSON reply
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().clone()
}
