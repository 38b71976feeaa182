//! gatesim: boolean logic circuit simulator core
//!
//! Circuits are named boolean expressions over named inputs. Expressions
//! use `&` (AND), `|` (OR), `!` (NOT) and parentheses, and are evaluated
//! with a two-stack operator-precedence machine.
//!
//! # Overview
//!
//! - **Tokenizer** ([`tokenize`]): splits expression text into tokens
//! - **Evaluator** ([`evaluate`]): reduces tokens against input bindings
//! - **Circuits** ([`Circuit`]): validated definitions with positional inputs
//! - **Truth tables** ([`TruthTable`]): all `2^n` assignments, in counter order
//! - **Registry** ([`Registry`]): circuits of one session, keyed by name
//!
//! The expression text is re-tokenized on every evaluation; no parse tree
//! is kept.
//!
//! # Example
//!
//! ```
//! use gatesim_core::{Circuit, EvalError};
//!
//! let circuit = Circuit::define("ic1", ["a", "b", "c"], "a | b & c").unwrap();
//!
//! // AND binds tighter than OR: false | (true & false)
//! assert_eq!(circuit.evaluate(&[false, true, false]), Ok(false));
//!
//! // One value per declared input
//! assert_eq!(
//!     circuit.evaluate(&[true]),
//!     Err(EvalError::ArityMismatch { expected: 3, provided: 1 })
//! );
//! ```
//!
//! # Truth tables
//!
//! ```
//! use gatesim_core::Registry;
//!
//! let mut registry = Registry::new();
//! registry.define("nand", ["a", "b"], "!(a & b)").unwrap();
//!
//! let outputs: Vec<bool> = registry
//!     .truth_table("nand")
//!     .unwrap()
//!     .map(|row| row.unwrap().output)
//!     .collect();
//! assert_eq!(outputs, vec![true, true, true, false]);
//! ```

pub mod circuit;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod limits;
pub mod registry;
pub mod token;
pub mod truth_table;

pub use circuit::Circuit;
pub use error::{DefineError, EvalError, RegistryError};
pub use eval::{evaluate, evaluate_tokens, Bindings};
pub use lexer::tokenize;
pub use limits::Limits;
pub use registry::Registry;
pub use token::{Operator, Token};
pub use truth_table::{assignment, Row, TruthTable};
