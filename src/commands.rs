//! CLI command definitions
//!
//! Defines the clap commands for the pet-store suite.

use clap::Subcommand;
use std::path::PathBuf;

const DEFAULT_FEATURE: &str = "features/petStore.feature";

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scenarios of a feature file against the pet-store API
    Run {
        /// Path to the feature file
        #[arg(default_value = DEFAULT_FEATURE)]
        feature: PathBuf,

        /// Base URL of the API (overrides the config file)
        #[arg(long, env = "PETSTORE_BASE_URL")]
        base_url: Option<String>,

        /// Per-step timeout in seconds (overrides the config file)
        #[arg(long)]
        step_timeout: Option<u64>,

        /// Only run scenarios whose name contains this text
        #[arg(long, short)]
        scenario: Option<String>,

        /// Print the run summary as JSON instead of progress lines
        #[arg(long)]
        json: bool,

        /// Configuration file (default: platform config dir)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List scenarios and their steps, marking steps without a handler.
    /// Without a feature file, list the registered step phrases.
    List {
        /// Path to the feature file
        feature: Option<PathBuf>,
    },

    /// Parse and bind a feature file without calling the API
    Check {
        /// Path to the feature file
        #[arg(default_value = DEFAULT_FEATURE)]
        feature: PathBuf,
    },
}
