//! CLI logging initialization
//!
//! Built on `tracing-subscriber`. Logs go to stderr so stdout carries only
//! evaluation output.

use clap::ValueEnum;
use playground_config::LogLevel;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored multi-line output
    Pretty,
    /// One line per event
    Compact,
    /// JSON lines, for tooling
    Json,
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Filter for the playground targets; everything else stays at `warn`
///
/// Forwarded diagnostics are only logged at `debug` and below, since failed
/// evaluations already print them.
pub fn targets(level: LogLevel) -> Targets {
    let diagnostic = if level <= LogLevel::Debug {
        LevelFilter::from_level(to_tracing_level(level))
    } else {
        LevelFilter::OFF
    };
    let level = to_tracing_level(level);
    Targets::new()
        .with_default(Level::WARN)
        .with_target("playground::adapter", level)
        .with_target("playground::process", level)
        .with_target("playground::diagnostic", diagnostic)
        .with_target("playground::cli", level)
}

/// Install the global subscriber
pub fn init(level: LogLevel, format: LogFormat) {
    let layer = create_format_layer(format, io::stderr).with_filter(targets(level));
    tracing_subscriber::registry().with(layer).init();
}

fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
