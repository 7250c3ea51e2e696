//! # filetree-api
//!
//! HTTP API layer for FileTree built on Axum.
//!
//! Provides the REST endpoints under `/api/v1`, the CORS and request
//! logging middleware, path and query extraction, DTOs, and the mapping
//! from [`AppError`](filetree_core::AppError) to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
