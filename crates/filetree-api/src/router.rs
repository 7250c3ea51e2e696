//! Route definitions for the FileTree HTTP API.
//!
//! Routes are grouped by resource and mounted under `/api/v1`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Prefix every route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(folder_routes())
        .merge(file_routes())
        .merge(item_routes())
        .merge(search_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest(API_PREFIX, api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// Liveness check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Folder listing (including `root` and `trash`) and creation
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders/{id}/children", get(handlers::folder::list_children))
}

/// File registration
fn file_routes() -> Router<AppState> {
    Router::new().route("/files", post(handlers::file::create_file))
}

/// Single-item read, rename, lifecycle
fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items/{id}",
            get(handlers::item::get_item)
                .patch(handlers::item::rename_item)
                .delete(handlers::item::delete_item),
        )
        .route("/items/{id}/trash", post(handlers::item::trash_item))
        .route("/items/{id}/restore", post(handlers::item::restore_item))
}

/// Name search
fn search_routes() -> Router<AppState> {
    Router::new().route("/search", get(handlers::search::search))
}
