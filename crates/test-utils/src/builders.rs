#![allow(dead_code)]

use execplan::plan::{Task, TaskId};

/// Builder for a task list to simplify test setup.
///
/// ```
/// use execplan_test_utils::builders::TaskSetBuilder;
///
/// let tasks = TaskSetBuilder::new()
///     .task(1, [2, 3])
///     .task(2, [3])
///     .task(3, [])
///     .build();
/// assert_eq!(tasks.len(), 3);
/// ```
pub struct TaskSetBuilder {
    tasks: Vec<Task>,
}

impl TaskSetBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task with the given id and dependency ids.
    ///
    /// Input order matters: the planner seeds its queue in the order tasks
    /// were added here.
    pub fn task(mut self, id: TaskId, depends_on: impl IntoIterator<Item = TaskId>) -> Self {
        self.tasks.push(Task::new(id, depends_on));
        self
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }
}

impl Default for TaskSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
