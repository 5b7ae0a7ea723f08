//! Reporting macros

/// Format a message and report it into a sink with the given severity
#[macro_export]
macro_rules! report {
    ($sink:expr, $severity:expr, $($arg:tt)*) => {{
        use $crate::DiagnosticSink as _;
        $sink.report($crate::Diagnostic::new($severity, ::std::format!($($arg)*)))
    }};
}

/// Report an error diagnostic
#[macro_export]
macro_rules! report_error {
    ($sink:expr, $($arg:tt)*) => {
        $crate::report!($sink, $crate::Severity::Error, $($arg)*)
    };
}

/// Report a warning diagnostic
#[macro_export]
macro_rules! report_warning {
    ($sink:expr, $($arg:tt)*) => {
        $crate::report!($sink, $crate::Severity::Warning, $($arg)*)
    };
}
