//! Per-scenario outcomes and the run summary

use serde::Serialize;

use crate::common::Error;
use crate::feature::{StepDefinition, StepKind};

/// Lifecycle of a scenario: `Pending → Running → {Passed | Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    Pending,
    Running,
    Passed,
    Failed,
}

/// Why a step failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Assertion,
    Transport,
    Timeout,
    Other,
}

/// The step that ended a scenario and what went wrong
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepFailure {
    pub kind: FailureKind,
    pub step_kind: StepKind,
    pub step: String,
    pub line: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl StepFailure {
    pub fn from_error(step: &StepDefinition, error: &Error) -> Self {
        let (kind, diff) = match error {
            Error::Assertion(failure) => (FailureKind::Assertion, failure.diff()),
            Error::Transport(_) => (FailureKind::Transport, None),
            Error::StepTimeout(_) => (FailureKind::Timeout, None),
            _ => (FailureKind::Other, None),
        };

        Self {
            kind,
            step_kind: step.kind,
            step: step.text.clone(),
            line: step.line,
            message: error.to_string(),
            diff,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub status: ScenarioStatus,
    pub steps_run: usize,
    pub steps_total: usize,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<StepFailure>,
}

impl ScenarioReport {
    pub fn pending(name: &str, steps_total: usize) -> Self {
        Self {
            name: name.to_string(),
            status: ScenarioStatus::Pending,
            steps_run: 0,
            steps_total,
            elapsed_ms: 0,
            failure: None,
        }
    }

    /// Pending → Running
    pub fn start(&mut self) {
        if self.status == ScenarioStatus::Pending {
            self.status = ScenarioStatus::Running;
        }
    }

    /// Running → Passed. Terminal states are left alone.
    pub fn pass(&mut self) {
        if self.status == ScenarioStatus::Running {
            self.status = ScenarioStatus::Passed;
        }
    }

    /// Running → Failed, keeping the first failure
    pub fn fail(&mut self, failure: StepFailure) {
        if self.status == ScenarioStatus::Running {
            self.status = ScenarioStatus::Failed;
            self.failure = Some(failure);
        }
    }

    pub fn passed(&self) -> bool {
        self.status == ScenarioStatus::Passed
    }

    pub fn steps_skipped(&self) -> usize {
        self.steps_total.saturating_sub(self.steps_run)
    }
}

/// Outcome of a whole run, in document order
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub feature: String,
    pub scenarios: Vec<ScenarioReport>,
}

impl RunSummary {
    pub fn new(feature: &str) -> Self {
        Self {
            feature: feature.to_string(),
            scenarios: Vec::new(),
        }
    }

    pub fn push(&mut self, report: ScenarioReport) {
        self.scenarios.push(report);
    }

    pub fn passed(&self) -> usize {
        self.scenarios.iter().filter(|s| s.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.scenarios.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.scenarios.iter().all(ScenarioReport::passed)
    }

    /// 0 when every scenario passed, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}
