//! Concurrent requests against a file-backed store

mod common;

use std::collections::HashSet;
use std::time::Duration;

use common::{list, send};
use directory_server::{Config, CredentialStore, DbService, ServerState, api};
use futures::future::join_all;
use http::{Method, StatusCode};
use serde_json::json;

async fn file_app(dir: &tempfile::TempDir) -> axum::Router {
    let path = dir.path().join("db.sqlite");
    let db = DbService::new(path.to_str().unwrap(), 5, Duration::from_secs(5))
        .await
        .unwrap();
    let state = ServerState::new(Config::default(), db, CredentialStore::with_defaults());
    api::build_app(state)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_leave_one_whole_version() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir).await;

    let (_, created) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({ "name": "N0", "email": "e0@x.com", "position": "P0" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let versions: Vec<_> = (1..=20)
        .map(|i| json!({ "name": format!("N{i}"), "email": format!("e{i}@x.com"), "position": format!("P{i}") }))
        .collect();

    let results = join_all(versions.iter().map(|body| {
        let app = app.clone();
        let uri = format!("/employees/{id}");
        let body = body.clone();
        async move { send(&app, Method::PUT, &uri, Some(body)).await }
    }))
    .await;
    assert!(results.iter().all(|(status, _)| *status == StatusCode::OK));

    let rows = list(&app).await;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    let stored = json!({ "name": row["name"], "email": row["email"], "position": row["position"] });
    assert!(versions.contains(&stored), "mixed row: {row}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir).await;

    let results = join_all((0..25).map(|i| {
        let app = app.clone();
        async move {
            send(
                &app,
                Method::POST,
                "/employees",
                Some(json!({ "name": format!("N{i}"), "email": format!("e{i}@x.com"), "position": "P" })),
            )
            .await
        }
    }))
    .await;

    let ids: HashSet<i64> = results
        .iter()
        .map(|(status, body)| {
            assert_eq!(*status, StatusCode::OK);
            body["id"].as_i64().unwrap()
        })
        .collect();
    assert_eq!(ids.len(), 25);
    assert_eq!(list(&app).await.len(), 25);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let app = file_app(&dir).await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/employees",
            Some(json!({ "name": "Kept", "email": "kept@x.com", "position": "P" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let app = file_app(&dir).await;
    let rows = list(&app).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Kept");
}
