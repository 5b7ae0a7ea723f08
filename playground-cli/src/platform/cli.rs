//! CLI formatted output and the one-shot evaluation

use playground_api::{EvaluationAdapter, EvaluationResult, Evaluator};
use std::fmt::Display;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;

/// How a one-shot evaluation ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Output printed to stdout
    Success,
    /// Diagnostics printed to stderr
    Failure,
    /// The evaluator itself failed
    Aborted,
}

impl Outcome {
    /// Process exit code: 0, 1 or 2
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
            Outcome::Aborted => ExitCode::from(2),
        }
    }
}

/// Render a failure message for the terminal
///
/// The first diagnostic goes on the `error:` line, later ones are indented
/// beneath it.
pub fn format_failure(message: &str) -> String {
    let mut lines = message.lines();
    let Some(first) = lines.next() else {
        return "error: evaluation failed without diagnostics".to_string();
    };

    let mut out = format!("error: {first}");
    for line in lines {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out
}

/// Evaluate `source` once, writing output to `out` and failures to `err`
pub fn run_once<E, O, W>(
    adapter: &EvaluationAdapter<E>,
    source: &str,
    mut out: O,
    mut err: W,
) -> io::Result<Outcome>
where
    E: Evaluator,
    E::Error: Display,
    O: Write,
    W: Write,
{
    match adapter.execute(source) {
        Ok(EvaluationResult::Success(output)) => {
            writeln!(out, "{output}")?;
            Ok(Outcome::Success)
        }
        Ok(EvaluationResult::Failure(message)) => {
            writeln!(err, "{}", format_failure(&message))?;
            Ok(Outcome::Failure)
        }
        Err(e) => {
            error!(target: "playground::cli", "evaluator aborted: {e}");
            writeln!(err, "error: {e}")?;
            Ok(Outcome::Aborted)
        }
    }
}
