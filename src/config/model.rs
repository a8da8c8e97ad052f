// src/config/model.rs

use serde::Deserialize;

use crate::plan::{Task, TaskId};

/// Top-level task manifest as read from a TOML file.
///
/// ```toml
/// [[task]]
/// id = 1
/// depends_on = [2, 3]
///
/// [[task]]
/// id = 2
/// depends_on = [3]
///
/// [[task]]
/// id = 3
/// ```
///
/// Manifest order is significant: it is the input order the planner uses to
/// break ties between tasks that become ready at the same time.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// All `[[task]]` entries, in file order.
    #[serde(default)]
    pub task: Vec<TaskEntry>,
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEntry {
    pub id: TaskId,

    /// Ids of tasks that must run before this one. Defaults to none.
    #[serde(default)]
    pub depends_on: Vec<TaskId>,
}

impl Manifest {
    /// Convert manifest entries into planner input, preserving file order.
    pub fn to_tasks(&self) -> Vec<Task> {
        self.task
            .iter()
            .map(|entry| Task {
                id: entry.id,
                depends_on: entry.depends_on.clone(),
            })
            .collect()
    }
}
