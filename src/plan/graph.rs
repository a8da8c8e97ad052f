// src/plan/graph.rs

use std::collections::{HashMap, HashSet};

use crate::errors::{PlanError, Result};
use crate::plan::task::{Task, TaskId};

/// Dependency graph for a single planning call.
///
/// Edge direction is dependency → dependent: `adjacency[d]` lists the tasks
/// that are waiting on `d`. The graph is built, consumed by the planner, and
/// discarded; nothing here outlives one call to
/// [`plan_execution`](crate::plan::plan_execution).
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Task ids in the order they were encountered in the input. The planner
    /// seeds its queue in this order, which is what makes the output
    /// deterministic when several tasks are ready at once.
    pub(crate) order: Vec<TaskId>,

    /// Direct dependents of each task, in edge-insertion order.
    pub(crate) adjacency: HashMap<TaskId, Vec<TaskId>>,

    /// Number of distinct unresolved dependencies per task.
    pub(crate) in_degree: HashMap<TaskId, usize>,
}

impl DependencyGraph {
    /// Build the graph from an input task list.
    ///
    /// Fails fast on invalid input:
    /// - a task id appearing more than once,
    /// - a dependency id with no corresponding task.
    ///
    /// Duplicate entries within one task's dependency list are collapsed to
    /// a single edge, so a dependency releases its dependent exactly once.
    pub fn build(tasks: &[Task]) -> Result<Self> {
        let mut order = Vec::with_capacity(tasks.len());
        let mut adjacency: HashMap<TaskId, Vec<TaskId>> = HashMap::with_capacity(tasks.len());
        let mut in_degree: HashMap<TaskId, usize> = HashMap::with_capacity(tasks.len());

        // First pass: register every task id with an empty adjacency list
        // and zero in-degree.
        for task in tasks {
            if adjacency.contains_key(&task.id) {
                return Err(PlanError::DuplicateTaskId(task.id));
            }
            order.push(task.id);
            adjacency.insert(task.id, Vec::new());
            in_degree.insert(task.id, 0);
        }

        // Second pass: add one edge per distinct dependency.
        for task in tasks {
            let mut seen: HashSet<TaskId> = HashSet::with_capacity(task.depends_on.len());
            for &dep in &task.depends_on {
                if !seen.insert(dep) {
                    continue;
                }
                let dependents =
                    adjacency
                        .get_mut(&dep)
                        .ok_or_else(|| PlanError::UnknownDependency {
                            task: task.id,
                            dependency: dep,
                        })?;
                dependents.push(task.id);
                // Key is present: the first pass registered every task id.
                if let Some(count) = in_degree.get_mut(&task.id) {
                    *count += 1;
                }
            }
        }

        Ok(Self {
            order,
            adjacency,
            in_degree,
        })
    }

    /// Number of tasks in the graph.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Task ids in input order.
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.order.iter().copied()
    }

    /// Immediate dependents of a task (tasks that list it in `depends_on`).
    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        self.adjacency
            .get(&id)
            .map(|deps| deps.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct dependencies still unresolved for a task.
    pub fn in_degree_of(&self, id: TaskId) -> usize {
        self.in_degree.get(&id).copied().unwrap_or(0)
    }
}
