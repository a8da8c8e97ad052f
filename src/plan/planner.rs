// src/plan/planner.rs

use std::collections::VecDeque;

use crate::errors::{PlanError, Result};
use crate::plan::graph::DependencyGraph;
use crate::plan::task::{Task, TaskId};

/// Compute an execution order for `tasks` in which every dependency appears
/// strictly before its dependents.
///
/// This is Kahn's algorithm (breadth-first topological sort) over the graph
/// built by [`DependencyGraph::build`]:
///
/// 1. Seed a FIFO queue with every zero-in-degree task, in input order.
/// 2. Repeatedly dequeue a task, append it to the plan, and decrement the
///    in-degree of each dependent; dependents reaching zero join the tail
///    of the queue.
/// 3. If the plan ends up shorter than the input, the leftover tasks form
///    at least one cycle and no valid order exists.
///
/// Input-order seeding plus FIFO tie-breaking makes the result order-stable:
/// the same input always produces the same plan, not merely *a* valid plan.
/// Tests rely on exact-match comparisons, so any change here that preserves
/// validity but reorders ties is still a breaking change.
///
/// The empty task list is valid and yields an empty plan. The input is never
/// mutated, and no state is kept between calls.
///
/// # Errors
///
/// - [`PlanError::DuplicateTaskId`] if an id appears twice in the input.
/// - [`PlanError::UnknownDependency`] if a task depends on an id that is
///   not in the input. A dangling edge is never silently dropped, since the
///   resulting plan would look valid while missing an intended constraint.
/// - [`PlanError::CycleDetected`] if the dependency relation contains a
///   cycle, including a task depending on itself. The error carries the ids
///   that could not be ordered, in input order.
pub fn plan_execution(tasks: &[Task]) -> Result<Vec<TaskId>> {
    let mut graph = DependencyGraph::build(tasks)?;

    let mut queue: VecDeque<TaskId> = graph
        .order
        .iter()
        .copied()
        .filter(|id| graph.in_degree[id] == 0)
        .collect();

    let mut plan = Vec::with_capacity(graph.len());

    while let Some(current) = queue.pop_front() {
        plan.push(current);

        // Release dependents of the completed task.
        let dependents = graph.adjacency.get(&current).cloned().unwrap_or_default();
        for dependent in dependents {
            if let Some(count) = graph.in_degree.get_mut(&dependent) {
                *count -= 1;
                if *count == 0 {
                    queue.push_back(dependent);
                }
            }
        }
    }

    if plan.len() != graph.len() {
        let remaining: Vec<TaskId> = graph
            .order
            .iter()
            .copied()
            .filter(|id| graph.in_degree[id] > 0)
            .collect();
        return Err(PlanError::CycleDetected { remaining });
    }

    Ok(plan)
}
