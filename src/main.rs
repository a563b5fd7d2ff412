use std::env;
use std::process::ExitCode;

use thiserror::Error;

use sparse_life::{Pattern, UnknownPatternError, render, simulate};

/// Input problems reported before any simulation runs
#[derive(Debug, PartialEq, Error)]
enum UsageError {
    #[error("missing pattern name")]
    MissingPattern,
    #[error("missing generation count")]
    MissingGenerations,
    #[error(transparent)]
    UnknownPattern(#[from] UnknownPatternError),
    #[error("invalid generation count `{0}`")]
    InvalidGenerations(String),
}

fn usage() -> String {
    let mut text = String::from("usage: sparse_life <pattern> <generations>\npatterns:\n");
    for pattern in Pattern::all() {
        text.push_str(&format!("  {:<12} {}\n", pattern.name(), pattern.description()));
    }
    text
}

/// Parse the arguments, run the simulation and lay out every state,
/// each followed by a blank line.
fn run(mut args: impl Iterator<Item = String>) -> Result<String, UsageError> {
    let pattern: Pattern = args.next().ok_or(UsageError::MissingPattern)?.parse()?;
    let raw_count = args.next().ok_or(UsageError::MissingGenerations)?;
    let generations: i64 = raw_count
        .parse()
        .map_err(|_| UsageError::InvalidGenerations(raw_count.clone()))?;

    let history = simulate(&pattern.world(), generations);

    let mut out = String::new();
    for state in &history {
        let grid = render(state);
        out.push_str(&grid);
        if !grid.is_empty() && !grid.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    Ok(out)
}

fn main() -> ExitCode {
    env_logger::init();

    match run(env::args().skip(1)) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            eprint!("{}", usage());
            ExitCode::FAILURE
        }
    }
}
