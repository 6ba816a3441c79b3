//! Pet-store BDD suite
//!
//! Runs Given/When/Then feature scenarios against the pet-store HTTP API.

use clap::Parser;
use commands::Commands;
use petstore_bdd::{cli, commands, common::logging};

#[derive(Parser)]
#[command(name = "petstore-bdd", about = "Behaviour-driven checks for the pet-store API")]
#[command(version, long_about = None)]
struct Cli {
    /// Verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.verbose);

    match cli::dispatch(cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            // Errors that reach here stopped the run before or outside scenario execution
            std::process::exit(2);
        }
    }
}
