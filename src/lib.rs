// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod plan;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::plan::{plan_execution, Task};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - manifest loading
/// - planning
/// - plan output
///
/// Everything here is synchronous; the planner has no suspension points.
pub fn run(args: CliArgs) -> Result<()> {
    let tasks = load_and_validate(&args.config)?;

    if args.dry_run {
        print_dry_run(&tasks);
        return Ok(());
    }

    let plan = plan_execution(&tasks)?;
    info!(tasks = tasks.len(), "computed execution plan");

    for id in &plan {
        println!("{id}");
    }

    Ok(())
}

/// Simple dry-run output: print tasks and their dependencies.
fn print_dry_run(tasks: &[Task]) {
    println!("execplan dry-run");
    println!();

    println!("tasks ({}):", tasks.len());
    for task in tasks {
        println!("  - {}", task.id);
        if !task.depends_on.is_empty() {
            println!("      depends_on: {:?}", task.depends_on);
        }
    }

    debug!("dry-run complete (no plan computed)");
}
