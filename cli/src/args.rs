use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "monkey")]
#[command(about = "Monkey lexer CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lex a source file and print its token stream, one token per line
    Tokens {
        /// Path to the source file
        path: String,
    },
    /// Start the REPL
    Repl,
}
