//! Exhaustive enumeration of circuit assignments.

use std::iter::FusedIterator;

use crate::circuit::Circuit;
use crate::error::EvalError;
use crate::limits::Limits;

/// One line of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Input values, in the circuit's declaration order.
    pub inputs: Vec<bool>,
    /// Circuit output for `inputs`.
    pub output: bool,
}

/// Lazy iterator over all `2^n` assignments of a circuit's inputs.
///
/// Rows come in binary-counter order: row `i` sets input `j` to bit `j`
/// of `i`, so row 0 is all-false and the first input toggles fastest.
#[derive(Debug, Clone)]
pub struct TruthTable<'a> {
    circuit: &'a Circuit,
    next: usize,
    rows: usize,
}

impl<'a> TruthTable<'a> {
    /// Start an enumeration, rejecting circuits wider than
    /// [`Limits::max_table_inputs`].
    pub fn with_limits(circuit: &'a Circuit, limits: &Limits) -> Result<Self, EvalError> {
        let inputs = circuit.input_count();
        let limit = limits.max_table_inputs.min(usize::BITS as usize - 1);
        if inputs > limit {
            return Err(EvalError::TableTooLarge { inputs, limit });
        }
        Ok(Self {
            circuit,
            next: 0,
            rows: 1 << inputs,
        })
    }

    /// The circuit being enumerated.
    pub fn circuit(&self) -> &'a Circuit {
        self.circuit
    }
}

impl Iterator for TruthTable<'_> {
    type Item = Result<Row, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.rows {
            return None;
        }
        let inputs = assignment(self.next, self.circuit.input_count());
        self.next += 1;
        Some(
            self.circuit
                .evaluate(&inputs)
                .map(|output| Row { inputs, output }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TruthTable<'_> {}

impl FusedIterator for TruthTable<'_> {}

/// Assignment for row `index` of a table over `width` inputs.
pub fn assignment(index: usize, width: usize) -> Vec<bool> {
    (0..width).map(|bit| (index >> bit) & 1 == 1).collect()
}
