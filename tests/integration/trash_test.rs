//! Integration tests for trash, restore, and permanent delete.

mod helpers;

use std::time::Duration;

use helpers::{TestApp, id_of, names};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_trash_and_restore_round_trip() {
    let app = TestApp::new();
    let docs = id_of(&app.create_folder("root", "Docs").await);
    let notes = id_of(&app.create_folder(&docs, "Notes").await);

    let response = app.post(&format!("/api/v1/items/{notes}/trash"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));

    let trashed = app.get(&format!("/api/v1/items/{notes}")).await.body["item"].clone();
    assert_eq!(trashed["isTrashed"], true);
    assert_eq!(trashed["originalParentId"], docs.as_str());
    assert_eq!(trashed["parentId"], docs.as_str());
    assert!(trashed["deletedAt"].is_string());

    let response = app.post(&format!("/api/v1/items/{notes}/restore"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    let restored = &response.body["item"];
    assert_eq!(restored["isTrashed"], false);
    assert_eq!(restored["parentId"], docs.as_str());
    assert!(restored["deletedAt"].is_null());
    assert!(restored["originalParentId"].is_null());

    assert_eq!(app.child_names(&docs, false).await, ["Notes"]);
}

#[tokio::test]
async fn test_trash_twice_keeps_original_parent() {
    let app = TestApp::new();
    let docs = id_of(&app.create_folder("root", "Docs").await);
    let notes = id_of(&app.create_folder(&docs, "Notes").await);

    app.trash(&notes).await;
    app.trash(&notes).await;

    let item = app.get(&format!("/api/v1/items/{notes}")).await.body["item"].clone();
    assert_eq!(item["originalParentId"], docs.as_str());
}

#[tokio::test]
async fn test_trash_view_lists_all_parents_newest_first() {
    let app = TestApp::new();
    let docs = id_of(&app.create_folder("root", "Docs").await);
    let first = id_of(&app.create_folder(&docs, "first").await);
    let second = id_of(&app.create_file("root", "second.txt", 4).await);
    app.create_folder("root", "kept").await;

    app.trash(&first).await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    app.trash(&second).await;

    let response = app.get("/api/v1/folders/trash/children").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body["children"]), ["second.txt", "first"]);
    assert_eq!(
        response.body["folder"],
        json!({
            "id": "trash",
            "name": "Trash",
            "type": "folder",
            "parentId": null,
            "sizeBytes": null,
            "itemsCount": 2,
            "createdAt": null,
            "modifiedAt": null,
            "isTrashed": false,
            "originalParentId": null,
            "deletedAt": null,
        })
    );
}

#[tokio::test]
async fn test_trashed_children_stop_counting() {
    let app = TestApp::new();
    let docs = id_of(&app.create_folder("root", "Docs").await);
    let a = id_of(&app.create_folder(&docs, "a").await);
    app.create_folder(&docs, "b").await;
    app.trash(&a).await;

    let docs_item = app.get(&format!("/api/v1/items/{docs}")).await.body["item"].clone();
    assert_eq!(docs_item["itemsCount"], 1);
}

#[tokio::test]
async fn test_restore_into_trashed_parent() {
    let app = TestApp::new();
    let archive = id_of(&app.create_folder("root", "Archive").await);
    let old = id_of(&app.create_folder(&archive, "Old").await);
    app.trash(&old).await;
    app.trash(&archive).await;

    let response = app.post(&format!("/api/v1/items/{old}/restore"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item"]["parentId"], archive.as_str());
    assert_eq!(response.body["item"]["isTrashed"], false);
    assert!(app.child_names("root", false).await.is_empty());
    assert_eq!(app.child_names(&archive, false).await, ["Old"]);
}

#[tokio::test]
async fn test_restore_renames_on_collision() {
    let app = TestApp::new();
    let plans = id_of(&app.create_folder("root", "Plans").await);
    app.trash(&plans).await;
    app.create_folder("root", "Plans").await;

    let response = app.post(&format!("/api/v1/items/{plans}/restore"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item"]["name"], "Plans (1)");
    assert_eq!(app.child_names("root", false).await, ["Plans", "Plans (1)"]);
}

#[tokio::test]
async fn test_delete_cascades_and_is_idempotent() {
    let app = TestApp::new();
    let docs = id_of(&app.create_folder("root", "Docs").await);
    let nested = id_of(&app.create_folder(&docs, "Nested").await);
    let path = format!("/api/v1/items/{docs}");

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));

    let response = app.get(&format!("/api/v1/items/{nested}")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));
}

#[tokio::test]
async fn test_missing_items() {
    let app = TestApp::new();
    let missing = "7b0e8a52-8f43-4f2b-9a55-3c1c3f0e2a11";

    let response = app.post(&format!("/api/v1/items/{missing}/trash"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.post(&format!("/api/v1/items/{missing}/restore"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_cannot_be_trashed_or_deleted() {
    let app = TestApp::new();

    let response = app.post("/api/v1/items/root/trash", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("DELETE", "/api/v1/items/root", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.get("/api/v1/folders/root/children").await;
    assert_eq!(response.status, StatusCode::OK);
}
