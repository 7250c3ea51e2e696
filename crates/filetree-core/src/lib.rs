//! # filetree-core
//!
//! Core crate for FileTree. Contains configuration schemas, the folder
//! reference and search scope types shared by the service and API layers,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other FileTree crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
