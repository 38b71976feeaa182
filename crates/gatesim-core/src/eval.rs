//! Two-stack operator-precedence evaluator.

use std::collections::HashMap;

use tracing::trace;

use crate::error::EvalError;
use crate::lexer::tokenize;
use crate::token::{Operator, Token};

/// Input name to value, built fresh for each evaluation.
pub type Bindings = HashMap<String, bool>;

/// Evaluate an expression against input bindings.
///
/// The text is tokenized and reduced in a single pass with an operand
/// stack and an operator stack. `!` binds tighter than `&`, which binds
/// tighter than `|`; operators of equal precedence reduce left to right.
///
/// # Errors
///
/// Returns an error if:
/// - An identifier is not a key of `bindings`
/// - The expression does not reduce to exactly one value (missing
///   operands, unbalanced parentheses, empty text)
pub fn evaluate(expression: &str, bindings: &Bindings) -> Result<bool, EvalError> {
    evaluate_tokens(tokenize(expression), bindings)
}

/// Evaluate an already tokenized expression.
pub fn evaluate_tokens<I>(tokens: I, bindings: &Bindings) -> Result<bool, EvalError>
where
    I: IntoIterator<Item = Token>,
{
    let mut stacks = Stacks::default();
    for token in tokens {
        trace!(%token, operands = stacks.operands.len(), "eval step");
        stacks.step(token, bindings)?;
    }
    stacks.finish()
}

/// Entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Op(Operator),
    Open,
}

#[derive(Debug, Default)]
struct Stacks {
    operands: Vec<bool>,
    operators: Vec<Pending>,
}

impl Stacks {
    fn step(&mut self, token: Token, bindings: &Bindings) -> Result<(), EvalError> {
        match token {
            Token::Var(name) => match bindings.get(&name) {
                Some(&value) => self.operands.push(value),
                None => return Err(EvalError::UndefinedToken(name)),
            },
            Token::LParen => self.operators.push(Pending::Open),
            Token::RParen => self.close_group()?,
            Token::Op(op) => {
                // `(` stops the loop, it never reduces.
                while let Some(&Pending::Op(top)) = self.operators.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    self.operators.pop();
                    self.apply(top)?;
                }
                self.operators.push(Pending::Op(op));
            }
        }
        Ok(())
    }

    /// Reduce back to the innermost `(` and discard it.
    fn close_group(&mut self) -> Result<(), EvalError> {
        loop {
            match self.operators.pop() {
                Some(Pending::Open) => return Ok(()),
                Some(Pending::Op(op)) => self.apply(op)?,
                None => return Err(self.malformed()),
            }
        }
    }

    fn apply(&mut self, op: Operator) -> Result<(), EvalError> {
        let right = self.pop_operand()?;
        let value = if op.is_unary() {
            !right
        } else {
            let left = self.pop_operand()?;
            op.apply(left, right)
        };
        self.operands.push(value);
        Ok(())
    }

    fn pop_operand(&mut self) -> Result<bool, EvalError> {
        self.operands.pop().ok_or_else(|| self.malformed())
    }

    fn finish(mut self) -> Result<bool, EvalError> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Op(op) => self.apply(op)?,
                Pending::Open => return Err(self.malformed()),
            }
        }
        match self.operands.as_slice() {
            [value] => Ok(*value),
            _ => Err(self.malformed()),
        }
    }

    fn malformed(&self) -> EvalError {
        EvalError::MalformedExpression {
            operands: self.operands.len(),
        }
    }
}
