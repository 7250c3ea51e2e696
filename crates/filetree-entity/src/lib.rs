//! # filetree-entity
//!
//! Domain entity models for FileTree. [`item::Item`] is the only table row;
//! everything else here is a value object built from items.

pub mod item;
