//! Feature file loading
//!
//! The Gherkin grammar itself is handled by the `gherkin` crate. This module
//! flattens its tree into a [`FeatureDocument`] and enforces what the runner
//! relies on: every scenario is named, unique and has steps, outlines are
//! rejected, and `And`/`But` never open a block.

use std::collections::HashSet;
use std::path::Path;

use gherkin::{GherkinEnv, StepType};
use tracing::debug;

use crate::common::{Error, Result};

use super::model::{FeatureDocument, ScenarioDefinition, StepDefinition, StepKind};

/// Load and parse a feature file from disk
pub fn load_feature(path: &Path) -> Result<FeatureDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    parse_feature(&path.display().to_string(), &content)
}

/// Parse feature text. `source_name` is only used in error messages.
pub fn parse_feature(source_name: &str, content: &str) -> Result<FeatureDocument> {
    // The grammar wants the last line terminated
    let parsed = if content.ends_with('\n') {
        gherkin::Feature::parse(content, GherkinEnv::default())
    } else {
        gherkin::Feature::parse(format!("{content}\n"), GherkinEnv::default())
    };
    let feature = parsed.map_err(|e| Error::gherkin(source_name, e))?;

    let document = Flattener::new(source_name).feature(&feature)?;
    debug!(
        feature = %document.name,
        scenarios = document.scenarios.len(),
        steps = document.step_count(),
        "Loaded feature"
    );
    Ok(document)
}

struct Flattener<'a> {
    source_name: &'a str,
    seen_names: HashSet<String>,
}

impl<'a> Flattener<'a> {
    fn new(source_name: &'a str) -> Self {
        Self {
            source_name,
            seen_names: HashSet::new(),
        }
    }

    fn error(&self, line: usize, message: impl Into<String>) -> Error {
        Error::parse(self.source_name, line, message)
    }

    fn feature(mut self, feature: &gherkin::Feature) -> Result<FeatureDocument> {
        let name = feature.name.trim();
        if name.is_empty() {
            return Err(self.error(feature.position.line, "feature name must not be empty"));
        }

        let background = match &feature.background {
            Some(background) => self.background(background)?,
            None => Vec::new(),
        };

        let mut scenarios = Vec::new();
        for scenario in &feature.scenarios {
            scenarios.push(self.scenario(scenario, &background)?);
        }

        // Rules come after loose scenarios in a feature file, so order is kept
        for rule in &feature.rules {
            let mut prefix = background.clone();
            if let Some(rule_background) = &rule.background {
                prefix.extend(self.background(rule_background)?);
            }
            for scenario in &rule.scenarios {
                scenarios.push(self.scenario(scenario, &prefix)?);
            }
        }

        if scenarios.is_empty() {
            return Err(self.error(
                feature.position.line,
                format!("feature '{}' contains no scenarios", name),
            ));
        }

        Ok(FeatureDocument {
            name: name.to_string(),
            description: feature.description.as_deref().and_then(normalize_description),
            scenarios,
        })
    }

    fn background(&self, background: &gherkin::Background) -> Result<Vec<StepDefinition>> {
        if background.steps.is_empty() {
            return Err(self.error(background.position.line, "background has no steps"));
        }
        self.steps(&background.steps)
    }

    fn scenario(
        &mut self,
        scenario: &gherkin::Scenario,
        prefix: &[StepDefinition],
    ) -> Result<ScenarioDefinition> {
        let line = scenario.position.line;
        let keyword = scenario.keyword.trim();
        if !scenario.examples.is_empty()
            || keyword.starts_with("Scenario Outline")
            || keyword.starts_with("Scenario Template")
        {
            return Err(self.error(line, "scenario outlines are not supported"));
        }

        let name = scenario.name.trim();
        if name.is_empty() {
            return Err(self.error(line, "scenario name must not be empty"));
        }
        if !self.seen_names.insert(name.to_string()) {
            return Err(self.error(line, format!("duplicate scenario name '{}'", name)));
        }
        if scenario.steps.is_empty() {
            return Err(self.error(line, format!("scenario '{}' has no steps", name)));
        }

        let mut steps = prefix.to_vec();
        steps.extend(self.steps(&scenario.steps)?);

        Ok(ScenarioDefinition {
            name: name.to_string(),
            line,
            steps,
        })
    }

    /// Convert one block of steps, resolving conjunctions to the kind before them
    fn steps(&self, steps: &[gherkin::Step]) -> Result<Vec<StepDefinition>> {
        let mut out: Vec<StepDefinition> = Vec::with_capacity(steps.len());

        for step in steps {
            let line = step.position.line;
            let keyword = step.keyword.trim();
            let text = step.value.trim();

            let kind = match (keyword, out.last()) {
                ("And" | "But" | "*", Some(previous)) => previous.kind,
                ("And" | "But", None) => {
                    return Err(self.error(
                        line,
                        format!("'{}' has no preceding Given/When/Then step", keyword),
                    ))
                }
                _ => step_kind(step.ty),
            };

            if text.is_empty() {
                return Err(self.error(line, format!("'{}' step has no text", keyword)));
            }

            out.push(StepDefinition {
                kind,
                keyword: keyword.to_string(),
                text: text.to_string(),
                line,
            });
        }

        Ok(out)
    }
}

fn step_kind(ty: StepType) -> StepKind {
    match ty {
        StepType::Given => StepKind::Given,
        StepType::When => StepKind::When,
        StepType::Then => StepKind::Then,
    }
}

/// Trim each description line and drop blank ones
fn normalize_description(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}
