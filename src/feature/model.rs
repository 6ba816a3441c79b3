//! In-memory representation of a loaded feature file

use serde::Serialize;
use std::fmt;

/// Clause kind of a step. `And`/`But`/`*` resolve to the kind of the step before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Given,
    When,
    Then,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Given => write!(f, "Given"),
            StepKind::When => write!(f, "When"),
            StepKind::Then => write!(f, "Then"),
        }
    }
}

/// A single step as written in the feature file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub kind: StepKind,
    /// Keyword as written (`Given`, `And`, `*`, ...)
    pub keyword: String,
    /// Phrase after the keyword, matched literally against bindings
    pub text: String,
    /// 1-based line in the source
    pub line: usize,
}

impl fmt::Display for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.keyword, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioDefinition {
    pub name: String,
    pub line: usize,
    /// Background steps first, then the scenario's own steps
    pub steps: Vec<StepDefinition>,
}

/// A parsed feature file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureDocument {
    pub name: String,
    pub description: Option<String>,
    pub scenarios: Vec<ScenarioDefinition>,
}

impl FeatureDocument {
    pub fn step_count(&self) -> usize {
        self.scenarios.iter().map(|s| s.steps.len()).sum()
    }
}
