use std::time::Instant;

/// Verdict of a single test run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
}

impl TestStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }
}

/// First failing assertion of a run: message plus call site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    pub file: &'static str,
    pub line: u32,
}

/// State for a single test run
#[derive(Debug, Clone)]
pub struct TestRunState {
    pub assertion_count: u32,
    pub passed_count: u32,
    pub status: TestStatus,
    pub failure: Option<Failure>,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
}

impl TestRunState {
    pub fn new() -> Self {
        Self {
            assertion_count: 0,
            passed_count: 0,
            status: TestStatus::Passed,
            failure: None,
            started_at: None,
            finished_at: None,
        }
    }

    /// Clear all bookkeeping so the record can serve the next run
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Count an assertion that evaluated true
    pub fn record_pass(&mut self) {
        self.assertion_count += 1;
        self.passed_count += 1;
    }

    /// Count an assertion that evaluated false. The first one latches the
    /// verdict and its call site; later ones are counted without detail.
    pub fn record_failure(&mut self, message: &str, file: &'static str, line: u32) {
        self.assertion_count += 1;
        if self.failure.is_none() {
            self.status = TestStatus::Failed;
            self.failure = Some(Failure {
                message: message.to_string(),
                file,
                line,
            });
        }
    }

    /// Start the timer
    pub fn tick(&mut self) {
        self.started_at = Some(Instant::now());
        self.finished_at = None;
    }

    /// Stop the timer
    pub fn tock(&mut self) {
        self.finished_at = Some(Instant::now());
    }

    pub fn timer_running(&self) -> bool {
        self.started_at.is_some() && self.finished_at.is_none()
    }

    /// Seconds between the timer brackets, at microsecond resolution.
    /// Zero until both brackets are set.
    pub fn duration_secs(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start).as_micros() as f64 / 1_000_000.0,
            _ => 0.0,
        }
    }
}

impl Default for TestRunState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_counts() {
        let mut state = TestRunState::new();
        state.record_pass();
        state.record_pass();
        state.record_failure("broken", "src/lib.rs", 7);
        assert_eq!(state.assertion_count, 3);
        assert_eq!(state.passed_count, 2);
        assert_eq!(state.status, TestStatus::Failed);
    }

    #[test]
    fn test_first_failure_kept() {
        let mut state = TestRunState::new();
        state.record_failure("first", "src/lib.rs", 10);
        state.record_failure("second", "src/lib.rs", 20);
        let failure = state.failure.unwrap();
        assert_eq!(failure.message, "first");
        assert_eq!(failure.line, 10);
        assert_eq!(state.assertion_count, 2);
        assert_eq!(state.passed_count, 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = TestRunState::new();
        state.record_failure("broken", "src/lib.rs", 7);
        state.tick();
        state.tock();
        state.reset();
        assert_eq!(state.assertion_count, 0);
        assert_eq!(state.passed_count, 0);
        assert_eq!(state.status, TestStatus::Passed);
        assert_eq!(state.failure, None);
        assert!(!state.timer_running());
        assert_eq!(state.duration_secs(), 0.0);
    }

    #[test]
    fn test_duration_zero_until_stopped() {
        let mut state = TestRunState::new();
        assert_eq!(state.duration_secs(), 0.0);
        state.tick();
        assert!(state.timer_running());
        assert_eq!(state.duration_secs(), 0.0);
        state.tock();
        assert!(!state.timer_running());
        assert!(state.duration_secs() >= 0.0);
    }

    #[test]
    fn test_tick_restarts_timer() {
        let mut state = TestRunState::new();
        state.tick();
        state.tock();
        state.tick();
        assert!(state.timer_running());
    }
}
