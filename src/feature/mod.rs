//! Scenario loader
//!
//! Turns a feature file into an immutable [`FeatureDocument`] that the
//! runner binds step handlers against.

mod model;
mod parser;

pub use model::*;
pub use parser::{load_feature, parse_feature};
