//! Named circuit definitions.

use crate::error::{DefineError, EvalError};
use crate::eval::{evaluate, Bindings};
use crate::limits::Limits;
use crate::truth_table::TruthTable;

/// A named boolean function of ordered inputs.
///
/// The expression is stored as text and re-evaluated on every call. Input
/// order fixes the positional binding used by [`Circuit::evaluate`] and the
/// column order of [`Circuit::truth_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    name: String,
    inputs: Vec<String>,
    expression: String,
}

impl Circuit {
    /// Define a circuit with default limits.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty
    /// - An input name does not occur anywhere in the expression text
    /// - More inputs are declared than [`Limits::max_inputs`] allows
    pub fn define<I, S>(
        name: impl Into<String>,
        inputs: I,
        expression: impl Into<String>,
    ) -> Result<Self, DefineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::define_with_limits(name, inputs, expression, &Limits::default())
    }

    /// Define a circuit with custom limits.
    pub fn define_with_limits<I, S>(
        name: impl Into<String>,
        inputs: I,
        expression: impl Into<String>,
        limits: &Limits,
    ) -> Result<Self, DefineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let inputs: Vec<String> = inputs.into_iter().map(Into::into).collect();
        let expression = expression.into();

        if name.is_empty() {
            return Err(DefineError::EmptyName);
        }
        if inputs.len() > limits.max_inputs {
            return Err(DefineError::TooManyInputs(limits.max_inputs));
        }

        // Substring check only: `a` counts as used in `ab`, and an empty
        // input name is contained in any expression.
        for input in &inputs {
            if !expression.contains(input.as_str()) {
                return Err(DefineError::UnusedInput(input.clone()));
            }
        }

        Ok(Self {
            name,
            inputs,
            expression,
        })
    }

    /// Circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared input names, in declaration order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Raw expression text.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Number of declared inputs.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Bind `values` to the declared inputs by position.
    ///
    /// A name declared twice takes the value of its last position.
    pub fn bind(&self, values: &[bool]) -> Result<Bindings, EvalError> {
        if values.len() != self.inputs.len() {
            return Err(EvalError::ArityMismatch {
                expected: self.inputs.len(),
                provided: values.len(),
            });
        }
        Ok(self
            .inputs
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect())
    }

    /// Evaluate the circuit for one input assignment.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::ArityMismatch`] if `values` does not have one
    /// entry per declared input, or any error from [`evaluate`].
    pub fn evaluate(&self, values: &[bool]) -> Result<bool, EvalError> {
        let bindings = self.bind(values)?;
        evaluate(&self.expression, &bindings)
    }

    /// Enumerate every input assignment with default limits.
    pub fn truth_table(&self) -> Result<TruthTable<'_>, EvalError> {
        TruthTable::with_limits(self, &Limits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_records_fields() {
        let circuit = Circuit::define("ic1", ["a", "b"], "a & b").unwrap();
        assert_eq!(circuit.name(), "ic1");
        assert_eq!(circuit.inputs(), ["a", "b"]);
        assert_eq!(circuit.expression(), "a & b");
        assert_eq!(circuit.input_count(), 2);
    }

    #[test]
    fn test_define_rejects_unused_input() {
        let result = Circuit::define("ic2", ["a", "c"], "a & b");
        assert_eq!(result, Err(DefineError::UnusedInput("c".into())));
    }

    #[test]
    fn test_define_substring_counts_as_used() {
        // `a` only appears inside `ab`, which still satisfies the check.
        let circuit = Circuit::define("sub", ["ab", "a"], "ab").unwrap();
        assert_eq!(circuit.input_count(), 2);
        assert_eq!(
            circuit.evaluate(&[true, false]),
            Ok(true),
        );
    }

    #[test]
    fn test_define_rejects_empty_name() {
        assert_eq!(
            Circuit::define("", ["a"], "a"),
            Err(DefineError::EmptyName)
        );
    }

    #[test]
    fn test_define_accepts_empty_input_name() {
        let circuit = Circuit::define("c", ["a", ""], "a").unwrap();
        assert_eq!(circuit.inputs(), ["a", ""]);
        assert_eq!(circuit.evaluate(&[true, false]), Ok(true));
    }

    #[test]
    fn test_duplicate_input_last_value_wins() {
        let circuit = Circuit::define("c", ["a", "a"], "a").unwrap();
        assert_eq!(circuit.input_count(), 2);
        assert_eq!(circuit.evaluate(&[true, false]), Ok(false));
        assert_eq!(circuit.evaluate(&[false, true]), Ok(true));
    }

    #[test]
    fn test_define_respects_input_limit() {
        let limits = Limits::new(2, 2);
        let result = Circuit::define_with_limits("c", ["a", "b", "c"], "a | b | c", &limits);
        assert_eq!(result, Err(DefineError::TooManyInputs(2)));
    }

    #[test]
    fn test_define_without_inputs() {
        let circuit = Circuit::define("none", Vec::<String>::new(), "x").unwrap();
        assert_eq!(circuit.input_count(), 0);
        assert_eq!(
            circuit.evaluate(&[]),
            Err(EvalError::UndefinedToken("x".into()))
        );
    }

    #[test]
    fn test_evaluate_positional_binding() {
        let circuit = Circuit::define("imp", ["p", "q"], "!p | q").unwrap();
        assert_eq!(circuit.evaluate(&[false, false]), Ok(true));
        assert_eq!(circuit.evaluate(&[true, false]), Ok(false));
        assert_eq!(circuit.evaluate(&[true, true]), Ok(true));
    }

    #[test]
    fn test_evaluate_arity_mismatch() {
        let circuit = Circuit::define("ic1", ["a", "b"], "a & b").unwrap();
        assert_eq!(
            circuit.evaluate(&[true]),
            Err(EvalError::ArityMismatch {
                expected: 2,
                provided: 1
            })
        );
        assert_eq!(
            circuit.evaluate(&[true, true, true]),
            Err(EvalError::ArityMismatch {
                expected: 2,
                provided: 3
            })
        );
    }

    #[test]
    fn test_bind_builds_map() {
        let circuit = Circuit::define("ic1", ["a", "b"], "a & b").unwrap();
        let bindings = circuit.bind(&[true, false]).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings["a"], true);
        assert_eq!(bindings["b"], false);
    }
}
