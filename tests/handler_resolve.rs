mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_resolve_redirects() {
    let (state, store) = common::create_test_state();
    common::seed_record(&store, "aZ3kP9q", "https://example.com/target").await;
    let server = common::make_server(state);

    let response = server.get("/api/aZ3kP9q").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_create_then_resolve_round_trip() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);
    let long_url = "https://example.com/path?q=1&r=two#frag";

    let created = server
        .post("/api")
        .json(&json!({ "url": long_url }))
        .await
        .json::<serde_json::Value>();
    let key = created["data"]["key"].as_str().unwrap();

    let response = server.get(&format!("/api/{}", key)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), long_url);
}

#[tokio::test]
async fn test_resolve_is_repeatable() {
    let (state, store) = common::create_test_state();
    common::seed_record(&store, "Rep3at0", "https://example.com/again").await;
    let server = common::make_server(state);

    for _ in 0..3 {
        let response = server.get("/api/Rep3at0").await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "https://example.com/again");
    }
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_resolve_legacy_key() {
    let (state, store) = common::create_test_state();
    common::seed_record(&store, "V1StGXR8_Z", "https://example.com/old").await;
    let server = common::make_server(state);

    let response = server.get("/api/V1StGXR8_Z").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/old");
}

#[tokio::test]
async fn test_resolve_unknown_key() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/api/zzzzzzz").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}

#[tokio::test]
async fn test_resolve_malformed_key_is_not_found() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    for path in ["/api/short", "/api/waytoolongkey", "/api/abc-def"] {
        let response = server.get(path).await;
        response.assert_status_not_found();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "not_found"
        );
    }
}

#[tokio::test]
async fn test_resolve_store_unavailable() {
    let state = common::create_test_state_with(Arc::new(common::UnavailableStore));
    let server = common::make_server(state);

    let response = server.get("/api/aZ3kP9q").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "unavailable"
    );
}

#[tokio::test]
async fn test_routes_mounted_at_root() {
    let (state, store) = common::create_test_state();
    common::seed_record(&store, "R00tKey", "https://example.com/root").await;
    let server = axum_test::TestServer::new(shortkey::routes::build_router(state, "/")).unwrap();

    let response = server.get("/R00tKey").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/root");
}
