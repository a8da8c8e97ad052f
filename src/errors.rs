// src/errors.rs

//! Crate-wide error types and aliases.

use thiserror::Error;

use crate::plan::TaskId;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("duplicate task id {0} in input")]
    DuplicateTaskId(TaskId),

    #[error("task {task} depends on unknown task {dependency}")]
    UnknownDependency { task: TaskId, dependency: TaskId },

    #[error("cycle detected in task dependencies involving {remaining:?}")]
    CycleDetected { remaining: Vec<TaskId> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PlanError>;
