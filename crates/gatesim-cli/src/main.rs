use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use gatesim_cli::{banner, run, Session};
use gatesim_core::Limits;
use tracing::{info, Level};

/// Define boolean logic circuits and evaluate them, one command per line.
#[derive(Parser, Debug)]
#[command(name = "gatesim", version, about, long_about = None)]
struct Args {
    /// Read commands from this file instead of standard input.
    script: Option<PathBuf>,

    /// Skip the welcome banner.
    #[arg(short, long)]
    quiet: bool,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Use tighter input and truth-table limits.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let limits = if args.strict {
        Limits::strict()
    } else {
        Limits::default()
    };
    info!(?limits, "starting session");
    let mut session = Session::with_limits(limits);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    if !args.quiet {
        for line in banner() {
            writeln!(out, "{line}")?;
        }
    }

    let summary = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(&mut session, BufReader::new(file), &mut out, &mut err)?
        }
        None => run(&mut session, io::stdin().lock(), &mut out, &mut err)?,
    };
    info!(lines = summary.lines, errors = summary.errors, "session finished");

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
