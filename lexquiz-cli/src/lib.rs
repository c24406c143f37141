//! lexquiz CLI library
//!
//! This library provides the command-line interface for the lexquiz
//! vocabulary quiz generator.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod progress;

pub use error::{CliError, CliResult};

use commands::Commands;

/// Dispatch a parsed subcommand.
pub fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Generate(args) => args.execute(),
        Commands::Coverage(args) => args.execute(),
        Commands::Make(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::List { subcommand } => commands::list(subcommand),
    }
}
