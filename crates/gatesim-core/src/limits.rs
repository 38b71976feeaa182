//! Resource limits for circuit definition and enumeration.

/// Resource limits applied by [`Circuit`](crate::Circuit) and
/// [`Registry`](crate::Registry).
///
/// A truth table has `2^n` rows, so enumeration is capped separately
/// from the number of inputs a circuit may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of declared inputs per circuit.
    pub max_inputs: usize,
    /// Maximum number of inputs for exhaustive truth-table enumeration.
    pub max_table_inputs: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_inputs: 64,
            max_table_inputs: 16,
        }
    }
}

impl Limits {
    /// Create limits with custom values.
    pub fn new(max_inputs: usize, max_table_inputs: usize) -> Self {
        Self {
            max_inputs,
            max_table_inputs,
        }
    }

    /// Permissive limits for testing.
    pub fn permissive() -> Self {
        Self {
            max_inputs: 1024,
            max_table_inputs: 24,
        }
    }

    /// Strict limits for shared or untrusted sessions.
    pub fn strict() -> Self {
        Self {
            max_inputs: 16,
            max_table_inputs: 10,
        }
    }
}
