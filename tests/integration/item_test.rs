//! Integration tests for reading and renaming items.

mod helpers;

use helpers::{ROOT_ID, TestApp, id_of};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_get_item() {
    let app = TestApp::new();
    let folder = app.create_folder("root", "Docs").await;
    let id = id_of(&folder);

    let response = app.get(&format!("/api/v1/items/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item"], folder);

    let root = app.get("/api/v1/items/root").await;
    assert_eq!(root.body["item"]["id"], ROOT_ID);
}

#[tokio::test]
async fn test_get_item_errors() {
    let app = TestApp::new();

    let response = app
        .get("/api/v1/items/7b0e8a52-8f43-4f2b-9a55-3c1c3f0e2a11")
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text, "Not found");

    let response = app.get("/api/v1/items/nope").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.get("/api/v1/items/trash").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_trims_and_dedups() {
    let app = TestApp::new();
    app.create_folder("root", "Plans").await;
    let other = id_of(&app.create_folder("root", "Other").await);

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/items/{other}"),
            Some(json!({ "name": "  Plans  " })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item"]["name"], "Plans (1)");
}

#[tokio::test]
async fn test_rename_to_same_name_is_noop() {
    let app = TestApp::new();
    let folder = app.create_folder("root", "Plans").await;
    let id = id_of(&folder);

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/items/{id}"),
            Some(json!({ "name": "Plans " })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item"]["name"], "Plans");
    assert_eq!(response.body["item"]["modifiedAt"], folder["modifiedAt"]);

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/items/{id}"),
            Some(json!({ "name": "   " })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item"]["modifiedAt"], folder["modifiedAt"]);
}

#[tokio::test]
async fn test_rename_requires_name() {
    let app = TestApp::new();
    let id = id_of(&app.create_folder("root", "Plans").await);
    let path = format!("/api/v1/items/{id}");

    let response = app.request("PATCH", &path, Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("PATCH", &path, Some(json!({ "name": "" }))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("PATCH", &path, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_with_mistyped_name_is_bad_request() {
    let app = TestApp::new();
    let id = id_of(&app.create_folder("root", "Plans").await);
    let path = format!("/api/v1/items/{id}");

    for body in [json!({ "name": 5 }), json!({ "name": ["a"] }), json!("Plans")] {
        let response = app.request("PATCH", &path, Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.text, "name is required");
    }

    let unchanged = app.get(&path).await;
    assert_eq!(unchanged.body["item"]["name"], "Plans");
}

#[tokio::test]
async fn test_rename_missing_item() {
    let app = TestApp::new();
    let response = app
        .request(
            "PATCH",
            "/api/v1/items/7b0e8a52-8f43-4f2b-9a55-3c1c3f0e2a11",
            Some(json!({ "name": "x" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
