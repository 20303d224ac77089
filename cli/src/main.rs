use anyhow::Result;
use clap::Parser;

mod args;
mod commands;
mod repl;

use args::{Cli, Commands};
use commands::tokens;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Tokens { path } => tokens::tokens_file(path),
        Commands::Repl => repl::run_repl(),
    }
}
