// src/config/mod.rs

//! Task manifest loading.
//!
//! - [`model`] maps the TOML manifest onto serde structs.
//! - [`loader`] reads a manifest from disk.

pub mod loader;
pub mod model;

pub use loader::{default_manifest_path, load_and_validate, load_from_path};
pub use model::{Manifest, TaskEntry};
