//! Scenario runner
//!
//! Executes bound scenarios against a step library and collects a
//! [`RunSummary`] of per-scenario outcomes.

mod executor;
mod report;
mod reporter;

pub use executor::Executor;
pub use report::*;
pub use reporter::{ConsoleReporter, Reporter, SilentReporter};
