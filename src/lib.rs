//! Pet-store BDD suite
//!
//! Loads Gherkin-style feature files, binds their steps to typed handlers
//! and runs them against the pet-store HTTP API one scenario at a time.

pub mod cli;
pub mod commands;
pub mod common;
pub mod feature;
pub mod petstore;
pub mod runner;
pub mod steps;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use feature::{load_feature, parse_feature, FeatureDocument};
pub use runner::{Executor, RunSummary, ScenarioStatus};
