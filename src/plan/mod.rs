// src/plan/mod.rs

//! Execution planning.
//!
//! - [`task`] defines the input record ([`Task`]).
//! - [`graph`] builds the per-call dependency graph.
//! - [`planner`] computes the execution order via a deterministic
//!   topological sort, or reports a cycle.

pub mod graph;
pub mod planner;
pub mod task;

pub use graph::DependencyGraph;
pub use planner::plan_execution;
pub use task::{Task, TaskId};
