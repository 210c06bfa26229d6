//! # Lexer for algebraic polynomial notation

use logos::Logos;

/// Tokens of `x^5 + x^2 + 1`
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// The indeterminate
    #[token("x")]
    #[token("X")]
    Var,

    /// Exponent marker
    #[token("^")]
    Caret,

    #[token("+")]
    Plus,

    /// Decimal literal, kept as text so overflow can be reported
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
}
