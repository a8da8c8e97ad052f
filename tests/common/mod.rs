#![allow(dead_code)]

/// Shared test setup: initialise tracing once per test binary.
pub fn init_tracing() {
    execplan_test_utils::init_tracing();
}
