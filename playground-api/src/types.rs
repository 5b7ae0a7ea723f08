//! Evaluation outcome types

use crate::error::EvaluationFailure;

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResult {
    /// Non-empty evaluator output
    Success(String),
    /// Diagnostics captured during the attempt, joined with `\n`
    Failure(String),
}

impl EvaluationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, EvaluationResult::Failure(_))
    }

    /// Output of a successful evaluation
    pub fn output(&self) -> Option<&str> {
        match self {
            EvaluationResult::Success(output) => Some(output),
            EvaluationResult::Failure(_) => None,
        }
    }

    /// Message of a failed evaluation
    pub fn message(&self) -> Option<&str> {
        match self {
            EvaluationResult::Success(_) => None,
            EvaluationResult::Failure(message) => Some(message),
        }
    }

    /// Convert into a `Result` so callers can use `?`
    pub fn into_result(self) -> Result<String, EvaluationFailure> {
        match self {
            EvaluationResult::Success(output) => Ok(output),
            EvaluationResult::Failure(message) => Err(EvaluationFailure::new(message)),
        }
    }
}

impl From<EvaluationResult> for Result<String, EvaluationFailure> {
    fn from(result: EvaluationResult) -> Self {
        result.into_result()
    }
}

/// Adapter counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdapterStats {
    /// Calls to `execute`
    pub evaluations: u64,
    pub successes: u64,
    pub failures: u64,
    /// Calls where the evaluator itself returned an error
    pub aborted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let result = EvaluationResult::Success("2".to_string());
        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.output(), Some("2"));
        assert_eq!(result.message(), None);
    }

    #[test]
    fn test_failure_accessors() {
        let result = EvaluationResult::Failure("Error: unexpected token".to_string());
        assert!(result.is_failure());
        assert_eq!(result.output(), None);
        assert_eq!(result.message(), Some("Error: unexpected token"));
    }

    #[test]
    fn test_into_result() {
        let ok = EvaluationResult::Success("out".to_string()).into_result();
        assert_eq!(ok, Ok("out".to_string()));

        let err: Result<String, EvaluationFailure> =
            EvaluationResult::Failure("d1\nd2".to_string()).into();
        let failure = err.unwrap_err();
        assert_eq!(failure.message(), "d1\nd2");
        assert_eq!(failure.to_string(), "d1\nd2");
    }
}
