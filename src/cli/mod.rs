//! CLI command handling
//!
//! Dispatches CLI commands and formats their output.

use colored::Colorize;
use std::path::Path;
use tracing::debug;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::Result;
use crate::feature::{load_feature, FeatureDocument};
use crate::petstore::{PetStep, PetStoreSteps};
use crate::runner::{ConsoleReporter, Executor, Reporter, SilentReporter};
use crate::steps::{bind, StepPhrase};

/// Dispatch a CLI command, returning the process exit code
pub async fn dispatch(command: Commands) -> Result<i32> {
    match command {
        Commands::Run {
            feature,
            base_url,
            step_timeout,
            scenario,
            json,
            config,
        } => {
            let config = match config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            }
            .with_overrides(base_url, step_timeout)?;
            debug!(base_url = %config.api.base_url, "Using pet-store API");

            let document = load_feature(&feature)?;
            let reporter: Box<dyn Reporter> = if json {
                Box::new(SilentReporter)
            } else {
                Box::new(ConsoleReporter)
            };

            let executor = Executor::new(PetStoreSteps::new(&config.api)?, config.runner)
                .with_scenario_filter(scenario)
                .with_reporter(reporter);

            if !json {
                print_feature_header(&document);
            }
            let summary = executor.run(&document).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }

            Ok(summary.exit_code())
        }

        Commands::List { feature: None } => {
            println!("Registered steps:");
            for phrase in PetStep::all() {
                println!("  {} {}", phrase.kind().to_string().cyan(), phrase.text());
            }
            Ok(0)
        }

        Commands::List {
            feature: Some(feature),
        } => {
            let document = load_feature(&feature)?;
            print_feature_header(&document);

            let mut unbound = 0;
            for scenario in &document.scenarios {
                println!("\n  {} {}", "Scenario:".blue(), scenario.name);
                for step in &scenario.steps {
                    if PetStep::resolve(step.kind, &step.text).is_some() {
                        println!("    {} {}", "✓".green(), step);
                    } else {
                        unbound += 1;
                        println!("    {} {} {}", "✗".red(), step, "(no handler)".dimmed());
                    }
                }
            }
            println!();

            Ok(if unbound == 0 { 0 } else { 2 })
        }

        Commands::Check { feature } => check(&feature),
    }
}

fn check(path: &Path) -> Result<i32> {
    let document = load_feature(path)?;
    let bound = bind::<PetStep>(&document)?;
    let steps: usize = bound.iter().map(|s| s.steps.len()).sum();

    println!(
        "{} {}: {} scenarios, {} steps bound",
        "✓".green(),
        path.display(),
        bound.len(),
        steps
    );
    Ok(0)
}

fn print_feature_header(document: &FeatureDocument) {
    println!("{} {}", "Feature:".blue().bold(), document.name.white().bold());
    if let Some(description) = &document.description {
        for line in description.lines() {
            println!("  {}", line.dimmed());
        }
    }
}
