// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::Manifest;
use crate::errors::Result;
use crate::plan::{DependencyGraph, Task};

/// Load a manifest from a given path and return the raw [`Manifest`].
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (id uniqueness, dependency references). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let manifest: Manifest = toml::from_str(&contents)?;

    debug!(path = %path.display(), tasks = manifest.task.len(), "loaded manifest");
    Ok(manifest)
}

/// Load a manifest from path and check that it is structurally sound.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Checks for duplicate task ids and unknown `depends_on` references by
///   building the dependency graph once.
///
/// Cycle detection is *not* done here; it is part of planning itself, so a
/// cyclic manifest loads fine and fails when a plan is requested.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let manifest = load_from_path(&path)?;
    let tasks = manifest.to_tasks();
    DependencyGraph::build(&tasks)?;
    Ok(tasks)
}

/// Helper to resolve a default manifest path.
///
/// Currently this just returns `Execplan.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `EXECPLAN_MANIFEST`).
/// - Look for multiple default locations.
pub fn default_manifest_path() -> PathBuf {
    PathBuf::from("Execplan.toml")
}
