//! Human-readable progress output

use colored::Colorize;

use crate::feature::{ScenarioDefinition, StepDefinition};

use super::report::{RunSummary, ScenarioReport, StepFailure};

/// Receives progress events from the executor
pub trait Reporter: Send + Sync {
    fn scenario_started(&self, _scenario: &ScenarioDefinition) {}
    fn step_passed(&self, _step: &StepDefinition) {}
    fn step_failed(&self, _step: &StepDefinition, _failure: &StepFailure) {}
    fn step_skipped(&self, _step: &StepDefinition) {}
    fn scenario_finished(&self, _report: &ScenarioReport) {}
    fn run_finished(&self, _summary: &RunSummary) {}
}

/// Discards every event (used for `--json` and in tests)
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Colored ✓/✗ lines on stdout
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn scenario_started(&self, scenario: &ScenarioDefinition) {
        println!(
            "\n{} {}",
            "Scenario:".blue().bold(),
            scenario.name.white().bold()
        );
    }

    fn step_passed(&self, step: &StepDefinition) {
        println!("  {} {}", "✓".green(), step.to_string().dimmed());
    }

    fn step_failed(&self, step: &StepDefinition, failure: &StepFailure) {
        println!("  {} {}", "✗".red(), step);
        println!("      {}", failure.message.red());
        if let Some(diff) = &failure.diff {
            for line in diff.lines() {
                println!("      {}", line.dimmed());
            }
        }
    }

    fn step_skipped(&self, step: &StepDefinition) {
        println!("  {} {}", "-".yellow(), step.to_string().dimmed());
    }

    fn scenario_finished(&self, report: &ScenarioReport) {
        if report.passed() {
            println!(
                "  {} ({} steps, {} ms)",
                "Passed".green().bold(),
                report.steps_total,
                report.elapsed_ms
            );
        } else {
            println!(
                "  {} (step {}/{}, {} skipped)",
                "Failed".red().bold(),
                report.steps_run,
                report.steps_total,
                report.steps_skipped()
            );
        }
    }

    fn run_finished(&self, summary: &RunSummary) {
        let total = summary.scenarios.len();
        let line = format!(
            "{} scenarios: {} passed, {} failed",
            total,
            summary.passed(),
            summary.failed()
        );

        if summary.all_passed() {
            println!("\n{} {}\n", "✓".green().bold(), line.green().bold());
        } else {
            println!("\n{} {}", "✗".red().bold(), line.red().bold());
            for report in summary.scenarios.iter().filter(|s| !s.passed()) {
                println!("  {} {}", "✗".red(), report.name);
            }
            println!();
        }
    }
}
