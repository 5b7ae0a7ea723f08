//! Error-capturing evaluation adapter

use crate::evaluator::Evaluator;
use crate::types::{AdapterStats, EvaluationResult};
use playground_config::CaptureConfig;
use playground_diag::{DiagnosticBuffer, DiagnosticSink, StderrSink, Tee};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Separator used when joining captured diagnostics into a failure message
pub const DIAGNOSTIC_SEPARATOR: &str = "\n";

/// Runs code through an [`Evaluator`] and turns its string-based signal into
/// an [`EvaluationResult`]
///
/// Every call gets its own capture buffer, so diagnostics never leak from one
/// call into the next and concurrent calls do not interleave. When forwarding
/// is enabled, each diagnostic is also passed unchanged to the channel given
/// at construction (stderr by default).
///
/// An evaluator that returns an empty string is treated as failed, even if
/// the evaluated code legitimately produced no output.
pub struct EvaluationAdapter<E> {
    evaluator: E,
    channel: Arc<dyn DiagnosticSink>,
    capture: CaptureConfig,
    counters: Counters,
}

#[derive(Default)]
struct Counters {
    evaluations: AtomicU64,
    successes: AtomicU64,
    failures: AtomicU64,
    aborted: AtomicU64,
}

impl<E: Evaluator> EvaluationAdapter<E> {
    /// Adapter with default capture settings, forwarding to stderr
    pub fn new(evaluator: E) -> Self {
        Self::with_config(evaluator, &CaptureConfig::default())
    }

    /// Adapter using the given capture settings, forwarding to stderr
    pub fn with_config(evaluator: E, capture: &CaptureConfig) -> Self {
        Self {
            evaluator,
            channel: Arc::new(StderrSink),
            capture: capture.clone(),
            counters: Counters::default(),
        }
    }

    /// Replace the channel diagnostics are forwarded to
    pub fn with_channel(mut self, channel: Arc<dyn DiagnosticSink>) -> Self {
        self.channel = channel;
        self
    }

    /// Evaluate `code` once
    ///
    /// Returns `Err` only when the evaluator itself fails; the error is
    /// passed through untouched.
    pub fn execute(&self, code: &str) -> Result<EvaluationResult, E::Error> {
        self.counters.evaluations.fetch_add(1, Ordering::Relaxed);
        debug!(target: "playground::adapter", code_len = code.len(), "evaluating");

        let buffer = DiagnosticBuffer::from_limit(self.capture.max_diagnostics);
        let mut sink = Tee::new().with(&buffer);
        if self.capture.forward {
            sink = sink.with(&*self.channel);
        }

        let output = match self.evaluator.execute(code, &sink) {
            Ok(output) => output,
            Err(e) => {
                self.counters.aborted.fetch_add(1, Ordering::Relaxed);
                warn!(
                    target: "playground::adapter",
                    captured = buffer.len(),
                    "evaluator aborted"
                );
                return Err(e);
            }
        };

        let result = if output.is_empty() {
            let dropped = buffer.dropped_count();
            let message = buffer.drain_joined(DIAGNOSTIC_SEPARATOR);
            self.counters.failures.fetch_add(1, Ordering::Relaxed);
            debug!(
                target: "playground::adapter",
                message_len = message.len(),
                dropped,
                "evaluation failed"
            );
            EvaluationResult::Failure(message)
        } else {
            let discarded = buffer.drain().len();
            self.counters.successes.fetch_add(1, Ordering::Relaxed);
            debug!(
                target: "playground::adapter",
                output_len = output.len(),
                discarded,
                "evaluation succeeded"
            );
            EvaluationResult::Success(output)
        };

        debug_assert!(buffer.is_empty());
        Ok(result)
    }
}

impl<E> EvaluationAdapter<E> {
    /// The wrapped evaluator
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Capture settings in effect
    pub fn capture(&self) -> &CaptureConfig {
        &self.capture
    }

    /// Snapshot of the outcome counters
    pub fn stats(&self) -> AdapterStats {
        AdapterStats {
            evaluations: self.counters.evaluations.load(Ordering::Relaxed),
            successes: self.counters.successes.load(Ordering::Relaxed),
            failures: self.counters.failures.load(Ordering::Relaxed),
            aborted: self.counters.aborted.load(Ordering::Relaxed),
        }
    }

    /// Consume the adapter, returning the evaluator
    pub fn into_evaluator(self) -> E {
        self.evaluator
    }
}

impl<E> fmt::Debug for EvaluationAdapter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationAdapter")
            .field("capture", &self.capture)
            .field("stats", &self.stats())
            .finish()
    }
}
