//! lexquiz command-line entry point

use clap::Parser;
use lexquiz_cli::commands::Commands;

/// Fill-in-the-blank vocabulary quiz generator
#[derive(Debug, Parser)]
#[command(name = "lexquiz", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = lexquiz_cli::run(cli.command) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
