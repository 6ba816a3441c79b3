//! Resolve every step of a feature to a typed phrase

use tracing::debug;

use crate::common::{Error, Result};
use crate::feature::{FeatureDocument, ScenarioDefinition, StepDefinition};

use super::StepPhrase;

/// A feature step paired with the phrase it resolved to
#[derive(Debug, Clone, Copy)]
pub struct BoundStep<'a, P> {
    pub definition: &'a StepDefinition,
    pub phrase: P,
}

/// A scenario whose steps all have handlers
#[derive(Debug, Clone)]
pub struct BoundScenario<'a, P> {
    pub definition: &'a ScenarioDefinition,
    pub steps: Vec<BoundStep<'a, P>>,
}

impl<P> BoundScenario<'_, P> {
    pub fn name(&self) -> &str {
        &self.definition.name
    }
}

/// Bind all scenarios of a document
///
/// Fails with [`Error::UnboundStep`] on the first step, in document order,
/// that has no registered phrase.
pub fn bind<P: StepPhrase>(document: &FeatureDocument) -> Result<Vec<BoundScenario<'_, P>>> {
    document
        .scenarios
        .iter()
        .map(|scenario| {
            let steps = scenario
                .steps
                .iter()
                .map(|step| match P::resolve(step.kind, &step.text) {
                    Some(phrase) => Ok(BoundStep {
                        definition: step,
                        phrase,
                    }),
                    None => Err(Error::UnboundStep {
                        scenario: scenario.name.clone(),
                        kind: step.kind,
                        text: step.text.clone(),
                        line: step.line,
                    }),
                })
                .collect::<Result<Vec<_>>>()?;

            debug!(scenario = %scenario.name, steps = steps.len(), "Bound scenario");
            Ok(BoundScenario {
                definition: scenario,
                steps,
            })
        })
        .collect()
}
