//! API error types

use std::io;
use thiserror::Error;

/// A failed evaluation, carrying the captured diagnostic text
///
/// Syntax errors, runtime errors and internal evaluator faults all collapse
/// into this one kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EvaluationFailure {
    message: String,
}

impl EvaluationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// The evaluator process could not be driven at all
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The program could not be started
    #[error("failed to start evaluator '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to the child failed
    #[error("evaluator I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_failure_display_is_message() {
        let failure = EvaluationFailure::new("line one\nline two");
        assert_eq!(failure.to_string(), "line one\nline two");
        assert_eq!(failure.clone().into_message(), "line one\nline two");
    }

    #[test]
    fn test_empty_failure() {
        assert_eq!(EvaluationFailure::new("").to_string(), "");
    }

    #[test]
    fn test_spawn_error_display_and_source() {
        let err = ProcessError::Spawn {
            program: "ocaml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'ocaml'"));
        assert!(msg.contains("not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_from() {
        let err: ProcessError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, ProcessError::Io(_)));
        assert!(err.to_string().contains("evaluator I/O error"));
    }
}
