use anyhow::Result;
use std::io::{self, BufRead, Write};

use monkey_lexer::{Lexer, TokenKind};

const PROMPT: &str = ">> ";

/// Read lines from stdin and print the token stream of each one.
///
/// Each line gets a fresh lexer; the session ends on EOF (ctrl-D).
pub fn run_repl() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{PROMPT}");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            println!("{token}");
        }
        print!("{PROMPT}");
        stdout.flush()?;
    }
    println!();
    Ok(())
}
