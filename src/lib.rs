//! Playground - run code through an external evaluator, capture its diagnostics
//!
//! # Architecture
//!
//! ```text
//! playground-config/  - Pure configuration data
//! playground-diag/    - Diagnostic sinks and the capture buffer
//! playground-api/     - EvaluationAdapter, Evaluator seam, ProcessEvaluator
//! playground-cli/     - `playground` binary (file, stdin, REPL)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use playground::{from_fn, EvaluationAdapter, EvaluationResult};
//!
//! let adapter = EvaluationAdapter::new(from_fn(|code, _| code.trim().to_string()));
//! let result = adapter.execute(" 42 ").unwrap();
//! assert_eq!(result, EvaluationResult::Success("42".to_string()));
//! ```

pub use playground_api::{
    from_fn, process_adapter, AdapterStats, EvaluationAdapter, EvaluationFailure,
    EvaluationResult, Evaluator, FnEvaluator, ProcessError, ProcessEvaluator,
    DIAGNOSTIC_SEPARATOR,
};
pub use playground_config::{CaptureConfig, EvalConfig, EvaluatorConfig, LogLevel};
pub use playground_diag::{
    report, report_error, report_warning, BufferStats, Diagnostic, DiagnosticBuffer,
    DiagnosticSink, NullSink, Severity, StderrSink, Tee, TracingSink,
};
