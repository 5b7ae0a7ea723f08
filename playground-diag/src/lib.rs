//! playground-diag - diagnostic capture
//!
//! Diagnostics are the messages an evaluator reports while it runs (syntax
//! errors, warnings, runtime faults). This crate provides:
//! - **Explicit sinks**: no global error channel; evaluators report into a
//!   `&dyn DiagnosticSink` handed to them
//! - **Capture**: `DiagnosticBuffer` keeps reported diagnostics in order,
//!   optionally bounded (oldest dropped first)
//! - **Forwarding**: `Tee` fans one report out to several sinks, e.g. a
//!   capture buffer plus `StderrSink`
//!
//! # Quick start
//!
//! ```
//! use playground_diag::{report_error, DiagnosticBuffer, StderrSink, Tee};
//!
//! let buffer = DiagnosticBuffer::new();
//! let sink = Tee::new().with(&buffer).with(&StderrSink);
//! report_error!(sink, "unexpected token at {}", 7);
//!
//! assert_eq!(buffer.drain_joined("\n"), "unexpected token at 7");
//! assert!(buffer.is_empty());
//! ```

mod buffer;
mod diagnostic;
mod macros;
mod sink;

pub use buffer::{BufferStats, DiagnosticBuffer};
pub use diagnostic::{Diagnostic, Severity};
pub use sink::{DiagnosticSink, NullSink, StderrSink, Tee, TracingSink};

// report!, report_error!, report_warning! are exported at the crate root
// through #[macro_export].
