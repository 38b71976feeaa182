//! Line-oriented command grammar.
//!
//! ```text
//! DEFINE <name>(<in1>, <in2>, ...): "<expression>"
//! RUN <name>(<v1>, <v2>, ...)
//! ALL <name>
//! LIST
//! HELP
//! ```

use thiserror::Error;

const DEFINE_USAGE: &str = r#"DEFINE <name>(<in1>, <in2>, ...): "<expression>""#;
const RUN_USAGE: &str = "RUN <name>(<v1>, <v2>, ...)";
const ALL_USAGE: &str = "ALL <name>";

/// Usage lines, one per command.
pub const USAGE: [&str; 5] = [DEFINE_USAGE, RUN_USAGE, ALL_USAGE, "LIST", "HELP"];

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Define or replace a circuit.
    Define {
        /// Circuit name.
        name: String,
        /// Input names, whitespace removed.
        inputs: Vec<String>,
        /// Expression text between the quotes.
        expression: String,
    },
    /// Evaluate a circuit for one assignment.
    Run {
        /// Circuit name.
        name: String,
        /// One value per declared input.
        values: Vec<bool>,
    },
    /// Print a circuit's truth table.
    All { name: String },
    /// Print every defined circuit.
    List,
    /// Print usage.
    Help,
}

/// Errors from [`Command::parse`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Command keyword was recognized but the rest of the line was not.
    #[error("invalid {command} command format, expected: {usage}")]
    InvalidFormat {
        /// Command keyword.
        command: &'static str,
        /// Expected shape of the line.
        usage: &'static str,
    },

    /// Command needs a circuit name and none was given.
    #[error("no circuit name provided")]
    MissingName,

    /// A RUN value is not `0`, `1`, `true` or `false`.
    #[error("invalid input value {0:?}, expected 0 or 1")]
    InvalidValue(String),
}

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    ///
    /// Keywords are case-insensitive; names, inputs and expressions are
    /// taken verbatim apart from whitespace trimming.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = if keyword.eq_ignore_ascii_case("DEFINE") {
            parse_define(rest)?
        } else if keyword.eq_ignore_ascii_case("RUN") {
            parse_run(rest)?
        } else if keyword.eq_ignore_ascii_case("ALL") {
            parse_all(rest)?
        } else if keyword.eq_ignore_ascii_case("LIST") {
            bare(rest, Command::List, "LIST")?
        } else if keyword.eq_ignore_ascii_case("HELP") {
            bare(rest, Command::Help, "HELP")?
        } else {
            return Err(CommandError::UnknownCommand(keyword.to_string()));
        };
        Ok(Some(command))
    }
}

/// A command that takes no arguments.
fn bare(rest: &str, command: Command, keyword: &'static str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::InvalidFormat {
            command: keyword,
            usage: keyword,
        })
    }
}

/// Split `name(args)tail` into its three parts.
fn split_call<'a>(
    text: &'a str,
    command: &'static str,
    usage: &'static str,
) -> Result<(&'a str, &'a str, &'a str), CommandError> {
    let invalid = CommandError::InvalidFormat { command, usage };
    let (name, rest) = text.split_once('(').ok_or(invalid.clone())?;
    let (args, tail) = rest.split_once(')').ok_or(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::MissingName);
    }
    Ok((name, args, tail))
}

/// Comma-separated list; `""` is the empty list.
fn split_list(args: &str) -> Vec<&str> {
    if args.trim().is_empty() {
        return Vec::new();
    }
    args.split(',').collect()
}

fn parse_define(rest: &str) -> Result<Command, CommandError> {
    let invalid = CommandError::InvalidFormat {
        command: "DEFINE",
        usage: DEFINE_USAGE,
    };
    let (name, args, tail) = split_call(rest, "DEFINE", DEFINE_USAGE)?;

    let quoted = tail
        .trim_start()
        .strip_prefix(':')
        .map(str::trim)
        .and_then(|body| body.strip_prefix('"'))
        .ok_or(invalid.clone())?;
    let (expression, after) = quoted.rsplit_once('"').ok_or(invalid.clone())?;
    if !after.trim().is_empty() {
        return Err(invalid);
    }

    let inputs: Vec<String> = split_list(args)
        .into_iter()
        .map(|input| input.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .collect();

    Ok(Command::Define {
        name: name.to_string(),
        inputs,
        expression: expression.to_string(),
    })
}

fn parse_run(rest: &str) -> Result<Command, CommandError> {
    let (name, args, tail) = split_call(rest, "RUN", RUN_USAGE)?;
    if !tail.trim().is_empty() {
        return Err(CommandError::InvalidFormat {
            command: "RUN",
            usage: RUN_USAGE,
        });
    }

    let values: Vec<bool> = split_list(args)
        .into_iter()
        .map(parse_value)
        .collect::<Result<_, _>>()?;

    Ok(Command::Run {
        name: name.to_string(),
        values,
    })
}

fn parse_value(text: &str) -> Result<bool, CommandError> {
    match text.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(CommandError::InvalidValue(other.to_string())),
    }
}

fn parse_all(rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingName);
    }
    if rest.contains(char::is_whitespace) {
        return Err(CommandError::InvalidFormat {
            command: "ALL",
            usage: ALL_USAGE,
        });
    }
    Ok(Command::All {
        name: rest.to_string(),
    })
}
