// src/plan/task.rs

use serde::Deserialize;

/// Identifier for a task. Must be unique within one planning call.
pub type TaskId = u64;

/// A unit of work with a declared set of prerequisite task ids.
///
/// This is a plain record; the planner never needs to know what the task
/// actually does, only how it relates to other tasks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    /// Unique id of this task.
    pub id: TaskId,

    /// Ids of tasks that must be ordered before this one.
    ///
    /// Every id listed here must refer to a task in the same input; a
    /// dangling reference is rejected by the planner. Duplicate entries are
    /// tolerated and count as a single dependency.
    #[serde(default)]
    pub depends_on: Vec<TaskId>,
}

impl Task {
    pub fn new(id: TaskId, depends_on: impl IntoIterator<Item = TaskId>) -> Self {
        Self {
            id,
            depends_on: depends_on.into_iter().collect(),
        }
    }
}
