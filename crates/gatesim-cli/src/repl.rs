//! Read-eval-print loop over any line source.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::session::{help, Session};

/// Counters for one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read, including blank and comment lines.
    pub lines: usize,
    /// Commands that failed.
    pub errors: usize,
}

/// Welcome text shown before the first prompt.
pub fn banner() -> Vec<String> {
    let mut lines = vec!["Welcome to the Digital Logic Circuit Simulator!".to_string()];
    lines.extend(help());
    lines.push("Enter your commands:".to_string());
    lines
}

/// Execute every line of `input`, writing results to `out` and
/// `Error: ...` lines to `err`.
///
/// Command failures are reported and skipped; only I/O errors stop the
/// loop.
pub fn run<R, W, E>(
    session: &mut Session,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<Summary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = Summary::default();

    for line in input.lines() {
        let line = line?;
        summary.lines += 1;

        match session.execute_line(&line) {
            Ok(output) => {
                for text in output {
                    writeln!(out, "{text}")?;
                }
            }
            Err(e) => {
                summary.errors += 1;
                writeln!(err, "Error: {e}")?;
            }
        }
        out.flush()?;
    }

    debug!(lines = summary.lines, errors = summary.errors, "input exhausted");
    Ok(summary)
}
