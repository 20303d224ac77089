use anyhow::{Context, Result};
use std::fs;

use monkey_lexer::Lexer;

/// Lex a source file and print one token per line.
///
/// Illegal bytes are reported as ILLEGAL tokens in the stream rather
/// than aborting; deciding whether they matter is the reader's call.
pub fn tokens_file(path: &str) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;

    for token in Lexer::tokenize(&source) {
        println!("{token}");
    }
    Ok(())
}
