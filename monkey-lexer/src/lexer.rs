/// Single-pass O(n) lexer for Monkey source code.
use crate::token::{lookup_keyword, Token, TokenKind};

pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    /// Lex the whole input, ending with the `Eof` token.
    ///
    /// Malformed input never aborts scanning: unrecognized bytes come
    /// back as `Illegal` tokens in the stream, so there is nothing
    /// fallible to propagate.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token();
            let is_eof = tok.is_eof();
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek2(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> u8 {
        let ch = self.source[self.pos];
        self.pos += 1;
        ch
    }

    fn skip_whitespace(&mut self) {
        // Monkey's surface syntax is whitespace-insensitive.
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.advance();
        }
    }

    /// Produce the next token, advancing the cursor past it.
    ///
    /// Safe to call on an exhausted lexer: once the cursor runs past the
    /// last byte, every further call returns `Eof` and consumes nothing.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.peek() else {
            return Token::new(TokenKind::Eof, "");
        };

        // Identifiers and keywords
        if ch.is_ascii_alphabetic() || ch == b'_' {
            let run = self.read_run();
            let kind = lookup_keyword(run).unwrap_or(TokenKind::Ident);
            return Token::new(kind, run);
        }

        // Integer literals share the identifier run reader, so a
        // digit-led token keeps any trailing letters: `5x` is one
        // Int token with lexeme "5x". Downstream consumers rely on
        // this, so it stays.
        if ch.is_ascii_digit() {
            let run = self.read_run();
            return Token::new(TokenKind::Int, run);
        }

        // Two-character operators: longest match first. The peek never
        // advances the cursor, so it cannot read past the end.
        match ch {
            b'=' => {
                if self.peek2() == Some(b'=') {
                    self.advance();
                    self.advance();
                    return Token::new(TokenKind::Eq, "==");
                }
                self.advance();
                return Token::new(TokenKind::Assign, "=");
            }
            b'!' => {
                if self.peek2() == Some(b'=') {
                    self.advance();
                    self.advance();
                    return Token::new(TokenKind::NotEq, "!=");
                }
                self.advance();
                return Token::new(TokenKind::Bang, "!");
            }
            _ => {}
        }

        // Single-character tokens
        self.advance();
        let (kind, lexeme) = match ch {
            b'+' => (TokenKind::Plus, "+"),
            b'-' => (TokenKind::Minus, "-"),
            b'*' => (TokenKind::Asterisk, "*"),
            b'/' => (TokenKind::Slash, "/"),
            b'<' => (TokenKind::Lt, "<"),
            b'>' => (TokenKind::Gt, ">"),
            b',' => (TokenKind::Comma, ","),
            b';' => (TokenKind::Semicolon, ";"),
            b'(' => (TokenKind::LParen, "("),
            b')' => (TokenKind::RParen, ")"),
            b'{' => (TokenKind::LBrace, "{"),
            b'}' => (TokenKind::RBrace, "}"),
            // One Illegal token per unrecognized byte, empty lexeme.
            _ => (TokenKind::Illegal, ""),
        };
        Token::new(kind, lexeme)
    }

    /// Consume the maximal run of letters, digits, and underscores
    /// starting at the cursor.
    fn read_run(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'_' {
                self.advance();
            } else {
                break;
            }
        }
        // The run is ASCII by construction, and `new` took a &str.
        std::str::from_utf8(&self.source[start..self.pos]).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::tokenize(src).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn single_char_operators() {
        assert_eq!(
            kinds("+ - * / < >"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn two_char_operators_beat_prefixes() {
        assert_eq!(kinds("=="), vec![TokenKind::Eq, TokenKind::Eof]);
        assert_eq!(kinds("!="), vec![TokenKind::NotEq, TokenKind::Eof]);
        assert_eq!(
            kinds("= ="),
            vec![TokenKind::Assign, TokenKind::Assign, TokenKind::Eof]
        );
    }

    #[test]
    fn delimiters() {
        assert_eq!(
            kinds("(){},;"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(
            kinds("fn let true false if else return"),
            vec![
                TokenKind::Function,
                TokenKind::Let,
                TokenKind::True,
                TokenKind::False,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Return,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn ident_not_keyword() {
        let tokens = Lexer::tokenize("letter");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].lexeme, "letter");
    }

    #[test]
    fn underscore_led_ident() {
        let tokens = Lexer::tokenize("_foo");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].lexeme, "_foo");
    }

    #[test]
    fn integer_literal() {
        let tokens = Lexer::tokenize("42");
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].lexeme, "42");
    }

    #[test]
    fn shared_run_reader_quirk() {
        // The run reader is shared between idents and ints, so mixed
        // runs stay one token either way.
        let tokens = Lexer::tokenize("5x");
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].lexeme, "5x");

        let tokens = Lexer::tokenize("x5");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].lexeme, "x5");
    }

    #[test]
    fn illegal_byte() {
        let tokens = Lexer::tokenize("#");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].lexeme, "");
    }

    #[test]
    fn illegal_run_yields_one_token_per_byte() {
        assert_eq!(
            kinds("###"),
            vec![
                TokenKind::Illegal,
                TokenKind::Illegal,
                TokenKind::Illegal,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn scanning_continues_after_illegal() {
        assert_eq!(
            kinds("a # b"),
            vec![
                TokenKind::Ident,
                TokenKind::Illegal,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn whitespace_only_is_eof() {
        assert_eq!(kinds("  \t\r\n  "), vec![TokenKind::Eof]);
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn eof_is_idempotent() {
        let mut lexer = Lexer::new("=");
        assert_eq!(lexer.next_token().kind, TokenKind::Assign);
        for _ in 0..3 {
            let tok = lexer.next_token();
            assert_eq!(tok.kind, TokenKind::Eof);
            assert_eq!(tok.lexeme, "");
        }
    }
}
