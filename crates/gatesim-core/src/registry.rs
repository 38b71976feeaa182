//! Name-keyed collection of defined circuits.

use std::collections::btree_map::{BTreeMap, Entry};

use tracing::debug;

use crate::circuit::Circuit;
use crate::error::{DefineError, RegistryError};
use crate::limits::Limits;
use crate::truth_table::TruthTable;

/// Circuits of one session, keyed by name.
///
/// Defining a name that already exists replaces the earlier circuit.
/// Iteration is in name order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    circuits: BTreeMap<String, Circuit>,
    limits: Limits,
}

impl Registry {
    /// Create an empty registry with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with custom limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            circuits: BTreeMap::new(),
            limits,
        }
    }

    /// Limits applied to definitions and truth tables.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Validate and store a circuit, returning the stored definition.
    pub fn define<I, S>(
        &mut self,
        name: impl Into<String>,
        inputs: I,
        expression: impl Into<String>,
    ) -> Result<&Circuit, DefineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let circuit = Circuit::define_with_limits(name, inputs, expression, &self.limits)?;
        Ok(self.insert(circuit))
    }

    /// Store an already validated circuit, replacing any circuit with the
    /// same name.
    pub fn insert(&mut self, circuit: Circuit) -> &Circuit {
        match self.circuits.entry(circuit.name().to_string()) {
            Entry::Occupied(mut slot) => {
                debug!(name = circuit.name(), "replacing circuit");
                slot.insert(circuit);
                slot.into_mut()
            }
            Entry::Vacant(slot) => {
                debug!(
                    name = circuit.name(),
                    inputs = circuit.input_count(),
                    "defined circuit"
                );
                slot.insert(circuit)
            }
        }
    }

    /// Look up a circuit by name.
    pub fn get(&self, name: &str) -> Option<&Circuit> {
        self.circuits.get(name)
    }

    /// Look up a circuit, failing with [`RegistryError::UnknownCircuit`].
    pub fn circuit(&self, name: &str) -> Result<&Circuit, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::UnknownCircuit(name.to_string()))
    }

    /// Evaluate a named circuit for one assignment.
    pub fn run(&self, name: &str, values: &[bool]) -> Result<bool, RegistryError> {
        Ok(self.circuit(name)?.evaluate(values)?)
    }

    /// Enumerate the truth table of a named circuit.
    pub fn truth_table(&self, name: &str) -> Result<TruthTable<'_>, RegistryError> {
        let circuit = self.circuit(name)?;
        Ok(TruthTable::with_limits(circuit, &self.limits)?)
    }

    /// All circuits in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Circuit> {
        self.circuits.values()
    }

    /// Number of defined circuits.
    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    /// Whether no circuit is defined.
    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }
}
