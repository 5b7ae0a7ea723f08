//! Evaluator that runs code through a child process
//!
//! The code is written to the child's stdin. Each non-blank stderr line is
//! reported as a diagnostic, a failing exit status yields the empty
//! "no output" signal, and a successful exit yields stdout.

use crate::error::ProcessError;
use crate::evaluator::Evaluator;
use playground_config::EvaluatorConfig;
use playground_diag::{Diagnostic, DiagnosticSink, Severity};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, trace};

/// Spawns one process per evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessEvaluator {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    env: BTreeMap<String, String>,
}

impl ProcessEvaluator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            env: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &EvaluatorConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            working_dir: config.working_dir.clone(),
            env: config.env.clone(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .envs(&self.env)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl Evaluator for ProcessEvaluator {
    type Error = ProcessError;

    fn execute(
        &self,
        code: &str,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<String, ProcessError> {
        let mut child = self.command().spawn().map_err(|source| ProcessError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        debug!(
            target: "playground::process",
            program = %self.program,
            pid = child.id(),
            "spawned evaluator"
        );

        let stdin = child.stdin.take();
        // stdin is fed from a second thread so a child that writes a lot
        // before reading cannot deadlock against us.
        let output = thread::scope(|scope| {
            let writer =
                stdin.map(|mut stdin| scope.spawn(move || stdin.write_all(code.as_bytes())));
            let output = child.wait_with_output()?;
            if let Some(writer) = writer {
                match writer.join() {
                    Ok(Ok(())) => {}
                    // The child exited without reading all of its input.
                    Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
                    Ok(Err(e)) => return Err(e),
                    Err(_) => return Err(io::Error::other("stdin writer panicked")),
                }
            }
            Ok::<_, io::Error>(output)
        })?;

        for line in String::from_utf8_lossy(&output.stderr).lines() {
            if line.trim().is_empty() {
                continue;
            }
            trace!(target: "playground::process", line, "captured stderr line");
            diagnostics.report(classify(line));
        }

        if !output.status.success() {
            debug!(
                target: "playground::process",
                status = %output.status,
                "evaluator exited unsuccessfully"
            );
            return Ok(String::new());
        }

        let mut stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.ends_with('\n') {
            stdout.pop();
            if stdout.ends_with('\r') {
                stdout.pop();
            }
        }
        Ok(stdout)
    }
}

fn classify(line: &str) -> Diagnostic {
    let severity = if line.trim_start().to_ascii_lowercase().starts_with("warning") {
        Severity::Warning
    } else {
        Severity::Error
    };
    Diagnostic::new(severity, line)
}
