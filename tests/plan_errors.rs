mod common;

use execplan::errors::PlanError;
use execplan::plan::plan_execution;
use execplan_test_utils::builders::TaskSetBuilder;

#[test]
fn three_task_cycle_is_rejected() {
    common::init_tracing();

    let tasks = TaskSetBuilder::new()
        .task(1, [2])
        .task(2, [3])
        .task(3, [1])
        .build();

    let err = plan_execution(&tasks).unwrap_err();
    match err {
        PlanError::CycleDetected { remaining } => {
            assert_eq!(remaining, vec![1, 2, 3]);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn self_dependency_is_a_cycle_of_one() {
    let tasks = TaskSetBuilder::new().task(1, [1]).build();

    let err = plan_execution(&tasks).unwrap_err();
    match err {
        PlanError::CycleDetected { remaining } => {
            assert_eq!(remaining, vec![1]);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn cycle_error_excludes_orderable_tasks() {
    // 4 is isolated and orderable; only the cycle members are reported.
    let tasks = TaskSetBuilder::new()
        .task(1, [1])
        .task(2, [3])
        .task(3, [2])
        .task(4, [])
        .build();

    let err = plan_execution(&tasks).unwrap_err();
    match err {
        PlanError::CycleDetected { remaining } => {
            assert_eq!(remaining, vec![1, 2, 3]);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn unknown_dependency_is_rejected() {
    let tasks = TaskSetBuilder::new().task(1, [99]).build();

    let err = plan_execution(&tasks).unwrap_err();
    match err {
        PlanError::UnknownDependency { task, dependency } => {
            assert_eq!(task, 1);
            assert_eq!(dependency, 99);
        }
        other => panic!("expected UnknownDependency, got {other:?}"),
    }
}

#[test]
fn duplicate_task_id_is_rejected() {
    let tasks = TaskSetBuilder::new().task(1, []).task(1, []).build();

    let err = plan_execution(&tasks).unwrap_err();
    match err {
        PlanError::DuplicateTaskId(id) => assert_eq!(id, 1),
        other => panic!("expected DuplicateTaskId, got {other:?}"),
    }
}

#[test]
fn cycle_error_message_mentions_cycle() {
    let tasks = TaskSetBuilder::new().task(1, [2]).task(2, [1]).build();

    let err = plan_execution(&tasks).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("cycle"), "unexpected message: {msg}");
}
