//! Integration tests for folder listing and creation.

mod helpers;

use helpers::{ROOT_ID, TestApp, id_of, names};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.get("/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_root_listing_describes_root() {
    let app = TestApp::new();
    app.create_folder("root", "Docs").await;

    let response = app.get("/api/v1/folders/root/children").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["folder"]["id"], ROOT_ID);
    assert_eq!(response.body["folder"]["parentId"], json!(null));
    assert_eq!(response.body["folder"]["itemsCount"], 1);
    assert_eq!(names(&response.body["children"]), ["Docs"]);

    // The literal root id behaves like the token.
    let by_id = app.get(&format!("/api/v1/folders/{ROOT_ID}/children")).await;
    assert_eq!(by_id.body["folder"]["id"], ROOT_ID);
}

#[tokio::test]
async fn test_duplicate_names_get_suffixes() {
    let app = TestApp::new();
    let first = app.create_folder("root", "Plans").await;
    let second = app.create_folder("root", "Plans").await;
    let third = app.create_folder("root", "Plans").await;

    assert_eq!(first["name"], "Plans");
    assert_eq!(second["name"], "Plans (1)");
    assert_eq!(third["name"], "Plans (2)");
}

#[tokio::test]
async fn test_default_name_and_parent() {
    let app = TestApp::new();
    let response = app.post("/api/v1/folders", None).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let folder = &response.body["folder"];
    assert_eq!(folder["name"], "New Folder");
    assert_eq!(folder["parentId"], ROOT_ID);
    assert_eq!(folder["type"], "folder");
    assert_eq!(folder["itemsCount"], 0);
    assert_eq!(folder["isTrashed"], false);
}

#[tokio::test]
async fn test_children_sorted_and_counted() {
    let app = TestApp::new();
    let docs = app.create_folder("root", "Docs").await;
    let docs_id = id_of(&docs);
    for name in ["beta", "alpha", "gamma"] {
        app.create_folder(&docs_id, name).await;
    }
    app.create_file(&docs_id, "alpha", 10).await;

    let response = app.get(&format!("/api/v1/folders/{docs_id}/children")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["folder"]["itemsCount"], 4);

    let children = &response.body["children"];
    assert_eq!(names(children), ["alpha", "alpha", "beta", "gamma"]);
    for child in children.as_array().unwrap() {
        match child["type"].as_str() {
            Some("folder") => assert_eq!(child["itemsCount"], 0),
            _ => assert!(child["itemsCount"].is_null()),
        }
    }
}

#[tokio::test]
async fn test_include_trashed_flag() {
    let app = TestApp::new();
    let docs = id_of(&app.create_folder("root", "Docs").await);
    let old = id_of(&app.create_folder(&docs, "old").await);
    app.create_folder(&docs, "new").await;
    app.trash(&old).await;

    assert_eq!(app.child_names(&docs, false).await, ["new"]);
    assert_eq!(app.child_names(&docs, true).await, ["new", "old"]);

    let response = app.get(&format!("/api/v1/folders/{docs}/children")).await;
    assert_eq!(names(&response.body["children"]), ["new"]);
}

#[tokio::test]
async fn test_listing_errors() {
    let app = TestApp::new();

    let response = app.get("/api/v1/folders/not-a-uuid/children").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .get("/api/v1/folders/7b0e8a52-8f43-4f2b-9a55-3c1c3f0e2a11/children")
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text, "Not found");
}

#[tokio::test]
async fn test_create_under_missing_or_invalid_parent() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/v1/folders",
            Some(json!({ "parentId": "7b0e8a52-8f43-4f2b-9a55-3c1c3f0e2a11" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let file = id_of(&app.create_file("root", "notes.txt", 3).await);
    let response = app
        .post("/api/v1/folders", Some(json!({ "parentId": file })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let bin = id_of(&app.create_folder("root", "Bin").await);
    app.trash(&bin).await;
    let response = app
        .post("/api/v1/folders", Some(json!({ "parentId": bin })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .post("/api/v1/folders", Some(json!({ "parentId": "trash" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_file_record() {
    let app = TestApp::new();
    let file = app.create_file("root", "report.pdf", 2048).await;
    assert_eq!(file["type"], "file");
    assert_eq!(file["sizeBytes"], 2048);
    assert!(file["itemsCount"].is_null());

    // Files and folders are deduplicated separately.
    let folder = app.create_folder("root", "report.pdf").await;
    assert_eq!(folder["name"], "report.pdf");
    let again = app.create_file("root", "report.pdf", 1).await;
    assert_eq!(again["name"], "report.pdf (1)");

    let response = app
        .post("/api/v1/files", Some(json!({ "sizeBytes": -5 })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
