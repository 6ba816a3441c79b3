//! Step binding
//!
//! A step library exposes an enumerated phrase type ([`StepPhrase`]) and an
//! async handler ([`StepBindings`]). Every step of a feature is resolved to a
//! phrase before anything runs, so a typo in a feature file fails the run
//! up front instead of halfway through.

mod binder;

pub use binder::{bind, BoundScenario, BoundStep};

use async_trait::async_trait;
use std::fmt;

use crate::common::Result;
use crate::feature::StepKind;

/// A closed set of step phrases known at compile time
pub trait StepPhrase: Copy + fmt::Debug + Send + Sync + 'static {
    /// Every phrase of the library
    fn all() -> &'static [Self];

    /// Clause kind the phrase is registered under
    fn kind(self) -> StepKind;

    /// Exact phrase text
    fn text(self) -> &'static str;

    /// Literal lookup of a step as written in a feature file
    fn resolve(kind: StepKind, text: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|phrase| phrase.kind() == kind && phrase.text() == text)
    }
}

/// Handlers for a step library
///
/// `Context` is created fresh for every scenario and dropped when it ends.
#[async_trait]
pub trait StepBindings: Send + Sync {
    type Phrase: StepPhrase;
    type Context: Default + Send;

    /// Execute one step. Errors fail the scenario.
    async fn run(&self, phrase: Self::Phrase, context: &mut Self::Context) -> Result<()>;
}

/// Phrases registered twice under the same kind
pub fn duplicate_phrases<P: StepPhrase>() -> Vec<P> {
    let all = P::all();
    all.iter()
        .enumerate()
        .filter(|(i, phrase)| {
            all[..*i]
                .iter()
                .any(|earlier| earlier.kind() == phrase.kind() && earlier.text() == phrase.text())
        })
        .map(|(_, phrase)| *phrase)
        .collect()
}
