//! Integration tests for name search.

mod helpers;

use helpers::{TestApp, id_of, names};
use http::StatusCode;
use serde_json::json;

async fn seeded() -> (TestApp, String) {
    let app = TestApp::new();
    let docs = id_of(&app.create_folder("root", "Docs").await);
    app.create_folder("root", "Quarterly Report").await;
    app.create_file(&docs, "report.pdf", 100).await;
    app.create_file(&docs, "photo.jpg", 200).await;
    (app, docs)
}

#[tokio::test]
async fn test_blank_query_returns_empty() {
    let (app, _) = seeded().await;

    for path in ["/api/v1/search", "/api/v1/search?q=", "/api/v1/search?q=%20%20"] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({ "results": [] }));
    }
}

#[tokio::test]
async fn test_blank_query_ignores_scope_and_folder() {
    let (app, _) = seeded().await;

    for path in [
        "/api/v1/search?q=&scope=bogus",
        "/api/v1/search?q=%20&folderId=nope",
        "/api/v1/search?q=&scope=current&folderId=nope",
    ] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({ "results": [] }));
    }
}

#[tokio::test]
async fn test_unknown_scope_searches_globally() {
    let (app, docs) = seeded().await;

    let response = app
        .get(&format!("/api/v1/search?q=report&scope=bogus&folderId={docs}"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body["results"]).len(), 2);
}

#[tokio::test]
async fn test_global_search_is_case_insensitive() {
    let (app, _) = seeded().await;

    let response = app.get("/api/v1/search?q=REPORT").await;
    assert_eq!(response.status, StatusCode::OK);
    let mut found = names(&response.body["results"]);
    found.sort();
    assert_eq!(found, ["Quarterly Report", "report.pdf"]);
}

#[tokio::test]
async fn test_current_scope_restricts_to_children() {
    let (app, docs) = seeded().await;

    let response = app
        .get(&format!("/api/v1/search?q=report&scope=current&folderId={docs}"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body["results"]), ["report.pdf"]);

    let response = app
        .get("/api/v1/search?q=report&scope=current&folderId=root")
        .await;
    assert_eq!(names(&response.body["results"]), ["Quarterly Report"]);

    // Without a folder the current scope is global.
    let response = app.get("/api/v1/search?q=report&scope=current").await;
    assert_eq!(names(&response.body["results"]).len(), 2);
}

#[tokio::test]
async fn test_trashed_items_are_excluded() {
    let (app, docs) = seeded().await;
    app.trash(&docs).await;

    let response = app.get("/api/v1/search?q=docs").await;
    assert_eq!(response.body, json!({ "results": [] }));

    // Children of a trashed folder stay live themselves.
    let response = app.get("/api/v1/search?q=photo").await;
    assert_eq!(names(&response.body["results"]), ["photo.jpg"]);
}

#[tokio::test]
async fn test_like_metacharacters_match_literally() {
    let app = TestApp::new();
    app.create_folder("root", "100% done").await;
    app.create_folder("root", "1000 items").await;

    let response = app.get("/api/v1/search?q=100%25").await;
    assert_eq!(names(&response.body["results"]), ["100% done"]);
}

#[tokio::test]
async fn test_malformed_parameters() {
    let app = TestApp::new();

    let response = app.get("/api/v1/search?q=x&scope=everywhere").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.get("/api/v1/search?q=x&folderId=nope").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
