//! Interactive read-eval-print loop
//!
//! One evaluation per input line. Commands start with `:`.

use super::format_failure;
use playground_api::{EvaluationAdapter, EvaluationResult, Evaluator};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "> ";

/// Run the loop until EOF or `:quit`
pub fn run<E, R, W>(adapter: &EvaluationAdapter<E>, input: R, mut out: W) -> io::Result<()>
where
    E: Evaluator,
    E::Error: Display,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let code = line.trim();

        match code {
            "" => continue,
            ":quit" | ":q" => break,
            ":stats" => {
                let stats = adapter.stats();
                writeln!(
                    out,
                    "evaluations: {}, successes: {}, failures: {}, aborted: {}",
                    stats.evaluations, stats.successes, stats.failures, stats.aborted
                )?;
                continue;
            }
            _ => {}
        }

        debug!(target: "playground::cli", code_len = code.len(), "repl input");
        match adapter.execute(code) {
            Ok(EvaluationResult::Success(output)) => writeln!(out, "{output}")?,
            Ok(EvaluationResult::Failure(message)) => {
                writeln!(out, "{}", format_failure(&message))?
            }
            Err(e) => writeln!(out, "evaluator error: {e}")?,
        }
    }
    Ok(())
}
