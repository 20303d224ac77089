/// Token types for the Monkey lexer.
use std::fmt;

/// A single token produced by the lexer.
///
/// `lexeme` is the exact source text the token was scanned from; it is
/// empty for `Eof` and `Illegal`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// All token variants recognized by the lexer.
///
/// This set is the contract with any downstream parser; do not add or
/// remove variants without coordinating with consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    Int,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,

    // Identifier
    Ident,

    // Operators
    Assign,
    Eq,
    Bang,
    NotEq,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Lt,
    Gt,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Unrecognized byte
    Illegal,

    // End of input
    Eof,
}

/// Resolve an identifier run against the keyword table.
///
/// The table is immutable process-wide data; anything not listed here
/// lexes as `Ident`.
pub fn lookup_keyword(literal: &str) -> Option<TokenKind> {
    let kind = match literal {
        "fn" => TokenKind::Function,
        "let" => TokenKind::Let,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "return" => TokenKind::Return,
        _ => return None,
    };
    Some(kind)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Int => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Ident => "IDENT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Bang => "BANG",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}
