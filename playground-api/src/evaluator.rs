//! External evaluator seam

use playground_diag::DiagnosticSink;
use std::convert::Infallible;

/// An opaque code evaluator
///
/// `Ok` with an empty string means "no usable output was produced"; any
/// non-empty string is the textual output. Diagnostics go to `diagnostics`,
/// which is only valid for the duration of the call. `Err` means the
/// evaluator itself broke down, not the evaluated code.
pub trait Evaluator {
    type Error;

    fn execute(&self, code: &str, diagnostics: &dyn DiagnosticSink) -> Result<String, Self::Error>;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    type Error = E::Error;

    fn execute(&self, code: &str, diagnostics: &dyn DiagnosticSink) -> Result<String, Self::Error> {
        (**self).execute(code, diagnostics)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    type Error = E::Error;

    fn execute(&self, code: &str, diagnostics: &dyn DiagnosticSink) -> Result<String, Self::Error> {
        (**self).execute(code, diagnostics)
    }
}

/// Evaluator backed by a closure, see [`from_fn`]
#[derive(Clone)]
pub struct FnEvaluator<F> {
    f: F,
}

/// Wrap a closure as an infallible evaluator
///
/// ```
/// use playground_api::{from_fn, EvaluationAdapter, EvaluationResult};
/// use playground_diag::report_error;
///
/// let adapter = EvaluationAdapter::new(from_fn(|code, diagnostics| {
///     if code == "1+1" {
///         "2".to_string()
///     } else {
///         report_error!(diagnostics, "Error: unexpected token");
///         String::new()
///     }
/// }));
///
/// let result = adapter.execute("1+1").unwrap();
/// assert_eq!(result, EvaluationResult::Success("2".to_string()));
/// ```
pub fn from_fn<F>(f: F) -> FnEvaluator<F>
where
    F: Fn(&str, &dyn DiagnosticSink) -> String,
{
    FnEvaluator { f }
}

impl<F> Evaluator for FnEvaluator<F>
where
    F: Fn(&str, &dyn DiagnosticSink) -> String,
{
    type Error = Infallible;

    fn execute(&self, code: &str, diagnostics: &dyn DiagnosticSink) -> Result<String, Infallible> {
        Ok((self.f)(code, diagnostics))
    }
}
