//! Polynomial expression parser
//!
//! Grammar: `term ('+' term)*` where a term is `1`, `x` or `x^k`.

use std::iter::Peekable;
use std::ops::Range;

use logos::{Logos, SpannedIter};

use crate::error::{Result, SpecError};
use crate::lexer::Token;

type Tokens<'a> = Peekable<SpannedIter<'a, Token>>;

/// Exponents of every term, in source order
pub(crate) fn parse_exponents(source: &str) -> Result<Vec<usize>> {
    let mut tokens = Token::lexer(source).spanned().peekable();
    let mut exponents = Vec::new();

    loop {
        let exponent = parse_term(&mut tokens, source)?;
        if exponents.contains(&exponent) {
            return Err(SpecError::DuplicateTerm(exponent));
        }
        exponents.push(exponent);

        match tokens.next() {
            None => break,
            Some((Ok(Token::Plus), _)) => continue,
            Some((_, span)) => return Err(unexpected(source, span)),
        }
    }

    Ok(exponents)
}

fn parse_term(tokens: &mut Tokens<'_>, source: &str) -> Result<usize> {
    match tokens.next() {
        None => Err(SpecError::UnexpectedEnd),
        Some((Ok(Token::Number(digits)), span)) => {
            if digits == "1" {
                Ok(0)
            } else {
                Err(unexpected(source, span))
            }
        }
        Some((Ok(Token::Var), _)) => {
            if !matches!(tokens.peek(), Some((Ok(Token::Caret), _))) {
                return Ok(1);
            }
            tokens.next();
            match tokens.next() {
                None => Err(SpecError::UnexpectedEnd),
                Some((Ok(Token::Number(digits)), _)) => digits
                    .parse::<usize>()
                    .map_err(|_| SpecError::InvalidExponent(digits)),
                Some((_, span)) => Err(unexpected(source, span)),
            }
        }
        Some((_, span)) => Err(unexpected(source, span)),
    }
}

fn unexpected(source: &str, span: Range<usize>) -> SpecError {
    SpecError::UnexpectedToken {
        found: source[span.clone()].to_string(),
        position: span.start,
    }
}
