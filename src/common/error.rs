//! Error types for the pet-store suite
//!
//! Errors fall into two groups: those that abort the whole run before any
//! scenario executes (parse, binding, configuration) and those scoped to a
//! single scenario (assertion, transport, timeout).

use std::fmt;
use thiserror::Error;

use crate::feature::StepKind;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the suite
#[derive(Error, Debug)]
pub enum Error {
    // === Loader Errors ===
    #[error("{source_name}{}: {message}", .line.map(|l| format!(":{l}")).unwrap_or_default())]
    Parse {
        source_name: String,
        /// 1-based line, when the failure can be pinned to one
        line: Option<usize>,
        message: String,
    },

    // === Binding Errors ===
    #[error("No handler bound for step '{kind} {text}' (line {line}) in scenario '{scenario}'")]
    UnboundStep {
        scenario: String,
        kind: StepKind,
        text: String,
        line: usize,
    },

    // === Scenario Errors ===
    #[error("{0}")]
    Assertion(AssertionFailure),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Step timed out after {0} seconds")]
    StepTimeout(u64),

    #[error("Missing scenario state: {0}")]
    MissingState(&'static str),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a parse error at a given line of a feature source
    pub fn parse(source_name: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.to_string(),
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a parse error reported by the Gherkin grammar itself
    pub fn gherkin(source_name: &str, error: impl fmt::Display) -> Self {
        Self::Parse {
            source_name: source_name.to_string(),
            line: None,
            message: error.to_string(),
        }
    }

    /// Create an assertion failure without an expected/actual pair
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(AssertionFailure::new(message))
    }

    /// Create an assertion failure carrying the expected and actual values
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::Assertion(AssertionFailure::new(message).with_values(expected, actual))
    }

    /// Whether this error aborts the run rather than a single scenario
    pub fn is_fatal_to_run(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. }
                | Error::UnboundStep { .. }
                | Error::Config(_)
                | Error::ConfigParse(_)
                | Error::FileRead { .. }
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Transport(format!("request timed out: {}", e))
        } else {
            Error::Transport(e.to_string())
        }
    }
}

/// An unmet expectation raised by a step handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    pub fn with_values(mut self, expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        self.expected = Some(expected.to_string());
        self.actual = Some(actual.to_string());
        self
    }

    /// Render the expected/actual pair as a two-line diff
    pub fn diff(&self) -> Option<String> {
        match (&self.expected, &self.actual) {
            (Some(expected), Some(actual)) => {
                Some(format!("- expected: {}\n+ actual:   {}", expected, actual))
            }
            _ => None,
        }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.expected, &self.actual) {
            (Some(expected), Some(actual)) => write!(
                f,
                "Assertion failed: {} (expected {}, got {})",
                self.message, expected, actual
            ),
            _ => write!(f, "Assertion failed: {}", self.message),
        }
    }
}
