pub mod state;

use log::debug;
use std::panic::Location;

pub use state::*;

use crate::report;

/// Runs test procedures one at a time, reusing a single owned state record.
/// Independent runners hold independent state.
pub struct TestRunner {
    state: TestRunState,
}

impl TestRunner {
    pub fn new() -> Self {
        Self {
            state: TestRunState::new(),
        }
    }

    /// Read-only view of the current run's bookkeeping
    pub fn state(&self) -> &TestRunState {
        &self.state
    }

    /// Record an assertion, deriving the error message from the literal
    /// text of the condition, e.g. `check(1 == 2, "1 == 2")`.
    #[track_caller]
    pub fn check(&mut self, condition: bool, expr: &str) {
        let location = Location::caller();
        if condition {
            self.state.record_pass();
        } else {
            self.state.record_failure(
                &format!("{} is false", expr),
                location.file(),
                location.line(),
            );
        }
    }

    /// Record an assertion with a custom error message
    #[track_caller]
    pub fn check_msg(&mut self, condition: bool, message: &str) {
        let location = Location::caller();
        if condition {
            self.state.record_pass();
        } else {
            self.state
                .record_failure(message, location.file(), location.line());
        }
    }

    /// Restart the timer. `run` starts it itself; a body only needs this
    /// to re-time a sub-interval.
    pub fn tick(&mut self) {
        self.state.tick();
    }

    /// Stop the timer early. `run` leaves a body-stopped timer untouched,
    /// so the body's own interval is what gets reported.
    pub fn tock(&mut self) {
        self.state.tock();
    }

    /// Run one test procedure and print its summary line.
    ///
    /// A failing assertion is recorded, not propagated; a panic in the
    /// body is not caught and unwinds to the caller.
    pub fn run<F>(&mut self, name: &str, test: F) -> TestStatus
    where
        F: FnOnce(&mut Self),
    {
        debug!("running test '{}'", name);
        self.state.reset();
        self.state.tick();
        test(self);
        if self.state.timer_running() {
            self.state.tock();
        }
        report::print_summary(name, &self.state);
        debug!(
            "test '{}' finished: {}/{} assertions passed",
            name, self.state.passed_count, self.state.assertion_count
        );
        self.state.status
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}
