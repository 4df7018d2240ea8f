use colored::Colorize;

use crate::runner::state::{TestRunState, TestStatus};

/// Build the uncolored summary text for a finished run
pub fn render_summary(name: &str, state: &TestRunState) -> String {
    let mut summary = format!(
        "{}: {}/{} assertions passed in {} seconds.",
        name,
        state.passed_count,
        state.assertion_count,
        state.duration_secs()
    );
    if let Some(failure) = &state.failure {
        summary.push_str(&format!("\n\t{}, on line {}", failure.message, failure.line));
    }
    summary
}

/// Print one colorized summary line for a finished run
pub fn print_summary(name: &str, state: &TestRunState) {
    let summary = render_summary(name, state);
    match state.status {
        TestStatus::Passed => println!("{}", summary.green()),
        TestStatus::Failed => println!("{}", summary.red()),
    }
}
