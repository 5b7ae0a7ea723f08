//! Diagnostic sinks

use crate::diagnostic::{Diagnostic, Severity};
use std::sync::Arc;

/// Receives diagnostics as they are emitted
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Fans each diagnostic out to several sinks, in the order they were added
#[derive(Default)]
pub struct Tee<'a> {
    sinks: Vec<&'a dyn DiagnosticSink>,
}

impl<'a> Tee<'a> {
    /// Empty fan-out; reports go nowhere until a sink is added
    pub fn new() -> Self {
        Tee { sinks: Vec::new() }
    }

    /// Append a sink
    pub fn with(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Number of attached sinks
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl DiagnosticSink for Tee<'_> {
    fn report(&self, diagnostic: Diagnostic) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.report(diagnostic.clone());
            }
            last.report(diagnostic);
        }
    }
}

/// Standard error channel: writes the message unchanged
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, diagnostic: Diagnostic) {
        eprintln!("{}", diagnostic.message);
    }
}

/// Emits each diagnostic as a `tracing` event on `playground::diagnostic`
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => {
                tracing::error!(target: "playground::diagnostic", "{}", diagnostic.message)
            }
            Severity::Warning => {
                tracing::warn!(target: "playground::diagnostic", "{}", diagnostic.message)
            }
        }
    }
}

/// Discards everything
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}
