//! Error types for circuit definition and evaluation.

use thiserror::Error;

/// Errors that can occur when defining a circuit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefineError {
    /// Circuit name is empty.
    #[error("circuit name is empty")]
    EmptyName,

    /// A declared input does not occur in the expression text.
    #[error("input {0} not defined in expression")]
    UnusedInput(String),

    /// Maximum input count exceeded.
    #[error("maximum inputs exceeded ({0})")]
    TooManyInputs(usize),
}

/// Errors that can occur during evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Token is neither an operator, a parenthesis, nor a bound input.
    #[error("undefined variable or operator in expression: {0}")]
    UndefinedToken(String),

    /// Expression does not reduce to exactly one value.
    #[error("invalid expression, {operands} values left after evaluation")]
    MalformedExpression {
        /// Operands on the stack when the failure was detected.
        operands: usize,
    },

    /// Supplied value count differs from the declared input count.
    #[error("number of input values does not match number of inputs (expected {expected}, provided {provided})")]
    ArityMismatch {
        /// Declared input count.
        expected: usize,
        /// Supplied value count.
        provided: usize,
    },

    /// Too many inputs to enumerate a truth table.
    #[error("truth table over {inputs} inputs exceeds limit of {limit}")]
    TableTooLarge {
        /// Declared input count.
        inputs: usize,
        /// Configured maximum.
        limit: usize,
    },
}

/// Errors from [`Registry`](crate::Registry) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No circuit with this name has been defined.
    #[error("circuit {0} not defined")]
    UnknownCircuit(String),

    /// Evaluation or truth-table enumeration failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
