//! Playground API - evaluation layer
//!
//! Provides:
//! - The `Evaluator` seam over an opaque external evaluator
//! - `EvaluationAdapter`, which captures diagnostics per call and turns the
//!   evaluator's empty-string failure signal into an `EvaluationResult`
//! - `ProcessEvaluator`, driving a real toolchain through a child process
//!
//! Configuration is passed explicitly; there is no global state.
//!
//! ```
//! use std::sync::Arc;
//! use playground_api::{from_fn, EvaluationAdapter, EvaluationResult};
//! use playground_diag::{report_error, NullSink};
//!
//! let adapter = EvaluationAdapter::new(from_fn(|_code, diagnostics| {
//!     report_error!(diagnostics, "Error: unexpected token");
//!     String::new()
//! }))
//! .with_channel(Arc::new(NullSink));
//!
//! let result = adapter.execute("syntax(((").unwrap();
//! assert_eq!(result, EvaluationResult::Failure("Error: unexpected token".into()));
//! ```

pub mod adapter;
pub mod error;
pub mod evaluator;
pub mod process;
pub mod types;

pub use adapter::{EvaluationAdapter, DIAGNOSTIC_SEPARATOR};
pub use error::{EvaluationFailure, ProcessError};
pub use evaluator::{from_fn, Evaluator, FnEvaluator};
pub use process::ProcessEvaluator;
pub use types::{AdapterStats, EvaluationResult};

pub use playground_config;
pub use playground_config::{CaptureConfig, EvalConfig, EvaluatorConfig, LogLevel};
pub use playground_diag;

/// Build a process-backed adapter from a full configuration
pub fn process_adapter(config: &EvalConfig) -> EvaluationAdapter<ProcessEvaluator> {
    EvaluationAdapter::with_config(
        ProcessEvaluator::from_config(&config.evaluator),
        &config.capture,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_adapter_uses_config() {
        let mut config = EvalConfig::default();
        config.evaluator.program = "node".to_string();
        config.capture.forward = false;

        let adapter = process_adapter(&config);

        assert_eq!(adapter.evaluator().program(), "node");
        assert!(!adapter.capture().forward);
        assert_eq!(adapter.stats(), AdapterStats::default());
    }
}
