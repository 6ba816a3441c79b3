//! Scenario executor
//!
//! Runs bound scenarios one at a time, steps in document order, and stops a
//! scenario at its first failing step.

use std::time::Instant;

use tracing::{debug, info, info_span, warn, Instrument};

use crate::common::config::RunnerConfig;
use crate::common::{Error, Result};
use crate::feature::FeatureDocument;
use crate::steps::{bind, BoundScenario, StepBindings};

use super::report::{RunSummary, ScenarioReport, StepFailure};
use super::reporter::{Reporter, SilentReporter};

pub struct Executor<B: StepBindings> {
    bindings: B,
    config: RunnerConfig,
    scenario_filter: Option<String>,
    reporter: Box<dyn Reporter>,
}

impl<B: StepBindings> Executor<B> {
    pub fn new(bindings: B, config: RunnerConfig) -> Self {
        Self {
            bindings,
            config,
            scenario_filter: None,
            reporter: Box::new(SilentReporter),
        }
    }

    /// Only run scenarios whose name contains `filter`
    pub fn with_scenario_filter(mut self, filter: Option<String>) -> Self {
        self.scenario_filter = filter;
        self
    }

    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Bind the whole document, then run the selected scenarios in order
    ///
    /// Binding errors are returned before any handler runs. Assertion and
    /// transport failures are recorded per scenario in the summary.
    pub async fn run(&self, document: &FeatureDocument) -> Result<RunSummary> {
        let bound = bind::<B::Phrase>(document)?;

        let selected: Vec<&BoundScenario<'_, B::Phrase>> = bound
            .iter()
            .filter(|scenario| self.is_selected(scenario.name()))
            .collect();

        if selected.is_empty() {
            if let Some(filter) = &self.scenario_filter {
                return Err(Error::Config(format!("No scenario matches '{}'", filter)));
            }
        }

        info!(
            feature = %document.name,
            scenarios = selected.len(),
            "Running feature"
        );

        let mut summary = RunSummary::new(&document.name);
        for scenario in selected {
            let span = info_span!("scenario", name = %scenario.name());
            let report = self.run_scenario(scenario).instrument(span).await;
            summary.push(report);
        }

        self.reporter.run_finished(&summary);
        Ok(summary)
    }

    fn is_selected(&self, name: &str) -> bool {
        match &self.scenario_filter {
            Some(filter) => name.contains(filter.as_str()),
            None => true,
        }
    }

    async fn run_scenario(&self, scenario: &BoundScenario<'_, B::Phrase>) -> ScenarioReport {
        let mut report = ScenarioReport::pending(scenario.name(), scenario.steps.len());
        let mut context = B::Context::default();
        let step_timeout = self.config.step_timeout();
        let started = Instant::now();

        self.reporter.scenario_started(scenario.definition);
        report.start();

        for (i, step) in scenario.steps.iter().enumerate() {
            debug!(step = %step.definition, "Running step");

            let result =
                match tokio::time::timeout(step_timeout, self.bindings.run(step.phrase, &mut context))
                    .await
                {
                    Ok(result) => result,
                    Err(_) => Err(Error::StepTimeout(self.config.step_timeout_secs)),
                };
            report.steps_run = i + 1;

            match result {
                Ok(()) => self.reporter.step_passed(step.definition),
                Err(e) => {
                    warn!(step = %step.definition, error = %e, "Step failed");
                    let failure = StepFailure::from_error(step.definition, &e);
                    self.reporter.step_failed(step.definition, &failure);
                    report.fail(failure);

                    for skipped in &scenario.steps[i + 1..] {
                        self.reporter.step_skipped(skipped.definition);
                    }
                    break;
                }
            }
        }

        report.pass();
        report.elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(status = ?report.status, elapsed_ms = report.elapsed_ms, "Scenario finished");
        self.reporter.scenario_finished(&report);
        report
    }
}
