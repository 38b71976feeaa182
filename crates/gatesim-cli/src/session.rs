//! Command execution against a circuit registry.

use gatesim_core::{DefineError, Limits, Registry, RegistryError, Row};
use thiserror::Error;
use tracing::{debug, info};

use crate::command::{Command, CommandError, USAGE};

/// Any failure of a single command. None of them end the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Define(#[from] DefineError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// One interactive session: a registry plus the output rendering for each
/// command.
///
/// Commands return the lines to print instead of writing them, so a failed
/// command produces no partial output.
#[derive(Debug, Default)]
pub struct Session {
    registry: Registry,
}

impl Session {
    /// Session with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with custom limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            registry: Registry::with_limits(limits),
        }
    }

    /// Circuits defined so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse and execute one line.
    pub fn execute_line(&mut self, line: &str) -> Result<Vec<String>, SessionError> {
        let result = match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        };
        if let Err(err) = &result {
            info!(%err, line, "command rejected");
        }
        result
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>, SessionError> {
        debug!(?command, "executing");
        match command {
            Command::Define {
                name,
                inputs,
                expression,
            } => self.define(name, inputs, expression),
            Command::Run { name, values } => self.run(&name, &values),
            Command::All { name } => self.all(&name),
            Command::List => Ok(self.list()),
            Command::Help => Ok(help()),
        }
    }

    fn define(
        &mut self,
        name: String,
        inputs: Vec<String>,
        expression: String,
    ) -> Result<Vec<String>, SessionError> {
        let circuit = self.registry.define(name, inputs, expression)?;
        let mut lines = vec![format!(
            "Defined circuit: {} with inputs: {} and expression: {}",
            circuit.name(),
            circuit.inputs().join(", "),
            circuit.expression()
        )];
        lines.push("Current circuits:".to_string());
        lines.extend(self.list());
        Ok(lines)
    }

    fn run(&self, name: &str, values: &[bool]) -> Result<Vec<String>, SessionError> {
        let result = self.registry.run(name, values)?;
        Ok(vec![
            format!("Running circuit: {name}"),
            format!("Input values: {}", bits(values)),
            format!("Result: {}", bit(result)),
        ])
    }

    fn all(&self, name: &str) -> Result<Vec<String>, SessionError> {
        let table = self.registry.truth_table(name)?;
        let circuit = table.circuit();

        let mut header = circuit.inputs().join(" ");
        if !header.is_empty() {
            header.push(' ');
        }
        header.push_str("res");

        let mut lines = Vec::with_capacity(table.len() + 2);
        lines.push(format!("Truth table for {name}:"));
        lines.push(header);
        for row in table {
            lines.push(render_row(&row.map_err(RegistryError::from)?));
        }
        Ok(lines)
    }

    fn list(&self) -> Vec<String> {
        if self.registry.is_empty() {
            return vec!["No circuits defined.".to_string()];
        }
        self.registry
            .iter()
            .map(|circuit| {
                format!(
                    "Name: {}, Inputs: {}, Expression: {}",
                    circuit.name(),
                    circuit.inputs().join(" "),
                    circuit.expression()
                )
            })
            .collect()
    }
}

/// Usage text printed by `HELP` and the welcome banner.
pub fn help() -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(USAGE.iter().map(|usage| format!("  {usage}")));
    lines.push(r#"Example: DEFINE ic1(a, b): "a & b""#.to_string());
    lines.push("Example: RUN ic1(1, 0)".to_string());
    lines.push("Example: ALL ic1".to_string());
    lines
}

fn bit(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}

fn bits(values: &[bool]) -> String {
    values
        .iter()
        .map(|&v| bit(v).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_row(row: &Row) -> String {
    let mut line = bits(&row.inputs);
    if !line.is_empty() {
        line.push(' ');
    }
    line.push(bit(row.output));
    line
}
