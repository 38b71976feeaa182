//! Token vocabulary for gatesim expressions.
//!
//! An expression is a flat sequence of these tokens. Identifiers are kept as
//! raw text; whether they name a bound input is decided by the evaluator.

use std::fmt;

/// A lexical unit of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Identifier text, possibly naming a circuit input.
    Var(String),
    /// One of `&`, `|`, `!`.
    Op(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Token {
    /// Map a delimiter character to its token.
    ///
    /// Returns `None` for characters that belong in identifiers.
    pub fn from_delimiter(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => Operator::from_symbol(ch).map(Token::Op),
        }
    }

    /// Convert to an [`Operator`] if this is an operator token.
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Op(op) => Some(*op),
            _ => None,
        }
    }

    /// Identifier text, if this is a variable token.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Token::Var(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(name) => f.write_str(name),
            Token::Op(op) => write!(f, "{}", op.symbol()),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

/// Boolean operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Logical AND: `a & b`
    And,
    /// Logical OR: `a | b`
    Or,
    /// Logical NOT: `!a`
    Not,
}

impl Operator {
    /// Parse an operator symbol.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '&' => Some(Operator::And),
            '|' => Some(Operator::Or),
            '!' => Some(Operator::Not),
            _ => None,
        }
    }

    /// The source character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::And => '&',
            Operator::Or => '|',
            Operator::Not => '!',
        }
    }

    /// Binding strength. Higher binds tighter; `(` on the operator stack
    /// counts as 0 so no operator reduces past it.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => 3,
            Operator::And => 2,
            Operator::Or => 1,
        }
    }

    /// Whether this operator consumes a single operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Not)
    }

    /// Apply a binary operator. `Not` ignores `left`.
    #[inline]
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Operator::And => left && right,
            Operator::Or => left || right,
            Operator::Not => !right,
        }
    }
}
