//! ProcessEvaluator end-to-end tests driving real child processes

#![cfg(unix)]

use playground_api::{EvaluationAdapter, EvaluationResult, Evaluator, ProcessEvaluator};
use playground_diag::{DiagnosticBuffer, NullSink, Severity};
use std::sync::Arc;

/// `sh -c <script>`; the evaluated code arrives on stdin
fn shell(script: &str) -> ProcessEvaluator {
    ProcessEvaluator::new("sh").arg("-c").arg(script)
}

fn quiet(evaluator: ProcessEvaluator) -> EvaluationAdapter<ProcessEvaluator> {
    EvaluationAdapter::new(evaluator).with_channel(Arc::new(NullSink))
}

#[test]
fn test_stdout_is_output() {
    let adapter = quiet(ProcessEvaluator::new("cat"));
    let result = adapter.execute("1+1\n").unwrap();
    assert_eq!(result, EvaluationResult::Success("1+1".to_string()));
}

#[test]
fn test_only_one_trailing_newline_is_stripped() {
    let adapter = quiet(shell("printf 'a\\n\\n'"));
    let result = adapter.execute("").unwrap();
    assert_eq!(result.output(), Some("a\n"));
}

#[test]
fn test_crlf_is_stripped() {
    let adapter = quiet(shell("printf 'done\\r\\n'"));
    let result = adapter.execute("").unwrap();
    assert_eq!(result.output(), Some("done"));
}

#[test]
fn test_nonzero_exit_is_failure_with_stderr() {
    let adapter = quiet(shell(
        "cat >/dev/null; echo 'Error: unexpected token' >&2; echo partial; exit 2",
    ));

    let result = adapter.execute("syntax(((").unwrap();

    assert_eq!(
        result,
        EvaluationResult::Failure("Error: unexpected token".to_string())
    );
}

#[test]
fn test_multiple_stderr_lines_are_joined() {
    let adapter = quiet(shell("echo d1 >&2; echo >&2; echo d2 >&2; exit 1"));
    let result = adapter.execute("").unwrap();
    assert_eq!(result.message(), Some("d1\nd2"));
}

#[test]
fn test_successful_exit_with_empty_stdout_is_failure() {
    let adapter = quiet(shell("cat >/dev/null"));
    let result = adapter.execute("let () = ()").unwrap();
    assert_eq!(result, EvaluationResult::Failure(String::new()));
}

#[test]
fn test_warnings_on_success_are_not_kept() {
    let channel = Arc::new(DiagnosticBuffer::new());
    let adapter = EvaluationAdapter::new(shell("echo 'Warning: unused x' >&2; echo 3"))
        .with_channel(channel.clone());

    let result = adapter.execute("let x = 1 in 3").unwrap();
    assert_eq!(result.output(), Some("3"));

    let forwarded = channel.records();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].severity, Severity::Warning);

    let next = adapter.execute("").unwrap();
    assert_eq!(next.output(), Some("3"));
}

#[test]
fn test_child_ignoring_stdin() {
    let big = "x".repeat(1 << 20);
    let adapter = quiet(shell("exit 1"));
    let result = adapter.execute(&big).unwrap();
    assert_eq!(result, EvaluationResult::Failure(String::new()));
}

#[test]
fn test_env_and_working_dir() {
    let evaluator = shell("printf '%s:' \"$GREETING\"; pwd")
        .env("GREETING", "hi")
        .current_dir("/");
    let buffer = DiagnosticBuffer::new();

    let output = evaluator.execute("", &buffer).unwrap();

    assert_eq!(output, "hi:/");
    assert!(buffer.is_empty());
}

#[test]
fn test_spawn_failure_propagates() {
    let adapter = quiet(ProcessEvaluator::new("playground-missing-evaluator"));
    let err = adapter.execute("1+1").unwrap_err();
    assert!(err.to_string().contains("playground-missing-evaluator"));
    assert_eq!(adapter.stats().aborted, 1);
}
