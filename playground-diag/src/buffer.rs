//! Capture buffer for diagnostics reported during one evaluation

use crate::diagnostic::Diagnostic;
use crate::sink::DiagnosticSink;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Buffer statistics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BufferStats {
    /// Diagnostics currently held
    pub record_count: usize,
    /// Diagnostics dropped because the limit was reached
    pub dropped_count: usize,
    /// Configured limit (`None` = unbounded)
    pub limit: Option<usize>,
}

/// Ordered diagnostic buffer
///
/// Unbounded by default. With a limit, a new diagnostic evicts the oldest
/// one once the buffer is full.
#[derive(Debug, Default)]
pub struct DiagnosticBuffer {
    inner: Mutex<VecDeque<Diagnostic>>,
    limit: Option<usize>,
    dropped: AtomicUsize,
}

impl DiagnosticBuffer {
    /// Create an unbounded buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding at most `limit` diagnostics
    pub fn with_limit(limit: usize) -> Self {
        Self::from_limit(Some(limit))
    }

    /// Create a buffer from an optional limit (`None` = unbounded)
    pub fn from_limit(limit: Option<usize>) -> Self {
        DiagnosticBuffer {
            inner: Mutex::new(VecDeque::new()),
            limit,
            dropped: AtomicUsize::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Diagnostic>> {
        // A panicking reporter cannot leave the deque half-written.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, diagnostic: Diagnostic) {
        let mut inner = self.lock();
        if let Some(limit) = self.limit {
            if limit == 0 {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                return;
            }
            if inner.len() >= limit {
                inner.pop_front();
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }
        inner.push_back(diagnostic);
    }

    /// Snapshot of the held diagnostics, in report order
    pub fn records(&self) -> Vec<Diagnostic> {
        self.lock().iter().cloned().collect()
    }

    /// Take every held diagnostic, leaving the buffer empty
    pub fn drain(&self) -> Vec<Diagnostic> {
        self.lock().drain(..).collect()
    }

    /// Drain and join the messages with `separator`
    pub fn drain_joined(&self, separator: &str) -> String {
        self.drain()
            .iter()
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Empty the buffer and reset the dropped counter
    pub fn clear(&self) {
        self.lock().clear();
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// Current buffer statistics
    pub fn stats(&self) -> BufferStats {
        BufferStats {
            record_count: self.len(),
            dropped_count: self.dropped_count(),
            limit: self.limit,
        }
    }

    /// Number of held diagnostics
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured limit
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Diagnostics evicted or refused since the last `clear`
    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl DiagnosticSink for DiagnosticBuffer {
    fn report(&self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
