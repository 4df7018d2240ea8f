pub mod report;
pub mod runner;

// Re-export common items
pub use report::{print_summary, render_summary};
pub use runner::{TestRunner, TestStatus};
