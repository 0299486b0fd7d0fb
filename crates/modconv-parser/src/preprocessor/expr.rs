//! `#if` expression evaluation
//!
//! Works on tokens that were already macro-expanded, with `defined` and the
//! `__has_*` operators replaced by numbers.

use super::macros::PpToken;
use crate::lexer::TokenKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExprError {
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected token '{0}' in expression")]
    UnexpectedToken(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("division by zero")]
    DivisionByZero,
}

/// Evaluate a controlling expression
pub fn evaluate(tokens: &[PpToken]) -> Result<i64, ExprError> {
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.conditional()?;
    // Top-level comma operator
    let mut value = value;
    while parser.eat(",") {
        value = parser.conditional()?;
    }
    match parser.peek() {
        None => Ok(value),
        Some(tok) => Err(ExprError::UnexpectedToken(tok.text.clone())),
    }
}

struct Parser<'a> {
    tokens: &'a [PpToken],
    pos: usize,
}

/// Binding power of binary operators; higher binds tighter
fn precedence(op: &str) -> Option<u8> {
    Some(match op {
        "||" => 1,
        "&&" => 2,
        "|" => 3,
        "^" => 4,
        "&" => 5,
        "==" | "!=" => 6,
        "<" | ">" | "<=" | ">=" => 7,
        "<<" | ">>" => 8,
        "+" | "-" => 9,
        "*" | "/" | "%" => 10,
        _ => return None,
    })
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a PpToken> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<&'a PpToken, ExprError> {
        let tok = self.tokens.get(self.pos).ok_or(ExprError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(tok)
    }

    fn eat(&mut self, text: &str) -> bool {
        match self.peek() {
            Some(tok) if tok.text == text => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expect(&mut self, text: &str) -> Result<(), ExprError> {
        let tok = self.next()?;
        if tok.text == text {
            Ok(())
        } else {
            Err(ExprError::UnexpectedToken(tok.text.clone()))
        }
    }

    fn conditional(&mut self) -> Result<i64, ExprError> {
        let cond = self.binary(1)?;
        if !self.eat("?") {
            return Ok(cond);
        }
        let then = self.conditional()?;
        self.expect(":")?;
        let otherwise = self.conditional()?;
        Ok(if cond != 0 { then } else { otherwise })
    }

    fn binary(&mut self, min_prec: u8) -> Result<i64, ExprError> {
        let mut lhs = self.unary()?;
        loop {
            let Some(op) = self.peek() else { break };
            if op.kind != TokenKind::Punct {
                break;
            }
            let Some(prec) = precedence(&op.text) else { break };
            if prec < min_prec {
                break;
            }
            self.pos += 1;
            let rhs = self.binary(prec + 1)?;
            lhs = apply(&op.text, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<i64, ExprError> {
        let tok = self.next()?;
        match (tok.kind, tok.text.as_str()) {
            (TokenKind::Punct, "+") => self.unary(),
            (TokenKind::Punct, "-") => Ok(self.unary()?.wrapping_neg()),
            (TokenKind::Punct, "!") => Ok((self.unary()? == 0) as i64),
            (TokenKind::Punct, "~") => Ok(!self.unary()?),
            (TokenKind::LParen, _) => {
                let mut value = self.conditional()?;
                while self.eat(",") {
                    value = self.conditional()?;
                }
                match self.next()? {
                    t if t.kind == TokenKind::RParen => Ok(value),
                    t => Err(ExprError::UnexpectedToken(t.text.clone())),
                }
            }
            (TokenKind::Number, text) => parse_number(text),
            (TokenKind::CharLiteral, text) => Ok(parse_char(text)),
            (TokenKind::Identifier, "true") => Ok(1),
            // Identifiers left after expansion evaluate to zero.
            (TokenKind::Identifier, _) => Ok(0),
            _ => Err(ExprError::UnexpectedToken(tok.text.clone())),
        }
    }
}

fn apply(op: &str, lhs: i64, rhs: i64) -> Result<i64, ExprError> {
    Ok(match op {
        "||" => (lhs != 0 || rhs != 0) as i64,
        "&&" => (lhs != 0 && rhs != 0) as i64,
        "|" => lhs | rhs,
        "^" => lhs ^ rhs,
        "&" => lhs & rhs,
        "==" => (lhs == rhs) as i64,
        "!=" => (lhs != rhs) as i64,
        "<" => (lhs < rhs) as i64,
        ">" => (lhs > rhs) as i64,
        "<=" => (lhs <= rhs) as i64,
        ">=" => (lhs >= rhs) as i64,
        "<<" => lhs.wrapping_shl(rhs as u32),
        ">>" => lhs.wrapping_shr(rhs as u32),
        "+" => lhs.wrapping_add(rhs),
        "-" => lhs.wrapping_sub(rhs),
        "*" => lhs.wrapping_mul(rhs),
        "/" if rhs == 0 => return Err(ExprError::DivisionByZero),
        "/" => lhs.wrapping_div(rhs),
        "%" if rhs == 0 => return Err(ExprError::DivisionByZero),
        "%" => lhs.wrapping_rem(rhs),
        _ => return Err(ExprError::UnexpectedToken(op.to_string())),
    })
}

/// Parse an integer literal with an optional base prefix and suffix
pub fn parse_number(text: &str) -> Result<i64, ExprError> {
    let invalid = || ExprError::InvalidNumber(text.to_string());
    let cleaned: String = text.chars().filter(|&c| c != '\'').collect();
    let digits = cleaned.trim_end_matches(['u', 'U', 'l', 'L', 'z', 'Z']);

    let (radix, body) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        (2, bin)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };

    u64::from_str_radix(body, radix)
        .map(|v| v as i64)
        .map_err(|_| invalid())
}

/// Value of a character literal; multi-character literals use the first one
fn parse_char(text: &str) -> i64 {
    let Some(start) = text.find('\'') else {
        return 0;
    };
    let inner = text[start + 1..].trim_end_matches('\'');
    let mut chars = inner.chars();
    match chars.next() {
        Some('\\') => match chars.next() {
            Some('n') => 10,
            Some('t') => 9,
            Some('r') => 13,
            Some('0') => 0,
            Some('a') => 7,
            Some('b') => 8,
            Some('f') => 12,
            Some('v') => 11,
            Some(c) => c as i64,
            None => 0,
        },
        Some(c) => c as i64,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessor::macros::tokenize;

    fn eval(text: &str) -> Result<i64, ExprError> {
        evaluate(&tokenize(text))
    }

    #[test]
    fn test_arithmetic_precedence() {
        assert_eq!(eval("1 + 2 * 3"), Ok(7));
        assert_eq!(eval("(1 + 2) * 3"), Ok(9));
        assert_eq!(eval("10 - 4 - 3"), Ok(3));
        assert_eq!(eval("1 << 4 | 1"), Ok(17));
        assert_eq!(eval("-1 < 0"), Ok(1));
    }

    #[test]
    fn test_logical_and_ternary() {
        assert_eq!(eval("1 && 0 || 1"), Ok(1));
        assert_eq!(eval("!0 ? 5 : 6"), Ok(5));
        assert_eq!(eval("0 ? 5 : 1 ? 7 : 8"), Ok(7));
        assert_eq!(eval("UNKNOWN_NAME"), Ok(0));
        assert_eq!(eval("true"), Ok(1));
    }

    #[test]
    fn test_literals() {
        assert_eq!(eval("0x10"), Ok(16));
        assert_eq!(eval("010"), Ok(8));
        assert_eq!(eval("0b101"), Ok(5));
        assert_eq!(eval("202002L"), Ok(202002));
        assert_eq!(eval("1'000'000ULL"), Ok(1_000_000));
        assert_eq!(eval("'A'"), Ok(65));
        assert_eq!(eval("'\\n'"), Ok(10));
    }

    #[test]
    fn test_errors() {
        assert_eq!(eval("1 +"), Err(ExprError::UnexpectedEnd));
        assert_eq!(eval("1 / 0"), Err(ExprError::DivisionByZero));
        assert!(matches!(eval("1 2"), Err(ExprError::UnexpectedToken(_))));
        assert!(matches!(eval("(1"), Err(ExprError::UnexpectedEnd)));
    }
}
