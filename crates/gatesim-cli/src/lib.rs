//! Command layer for gatesim.
//!
//! Parses `DEFINE`, `RUN`, `ALL`, `LIST` and `HELP` lines, executes them
//! against a [`gatesim_core::Registry`], and renders the results.

pub mod command;
pub mod repl;
pub mod session;

pub use command::{Command, CommandError};
pub use repl::{banner, run, Summary};
pub use session::{Session, SessionError};
