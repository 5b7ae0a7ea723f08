//! Playground CLI - Command line interface
//!
//! Evaluates a file, stdin, or an interactive session through the configured
//! external evaluator.

use clap::Parser;
use playground_api::{process_adapter, LogLevel};
use playground_diag::TracingSink;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "playground",
    about = "Evaluate code through an external evaluator and report its diagnostics",
    version
)]
struct Cli {
    /// Source file to evaluate (stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Configuration file (default: ./playground.json if present)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Start an interactive session
    #[arg(long, conflicts_with = "file")]
    repl: bool,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    logging::init(cli.log_level.unwrap_or(config.log_level), cli.log_format);
    info!(
        target: "playground::cli",
        program = %config.evaluator.program,
        "configuration loaded"
    );

    // Forwarded diagnostics become debug-level log events; failures print
    // their own message.
    let adapter = process_adapter(&config).with_channel(Arc::new(TracingSink));

    if cli.repl {
        let stdin = io::stdin();
        return match platform::repl::run(&adapter, stdin.lock(), io::stdout()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::from(2)
            }
        };
    }

    let source = match read_source(cli.file.as_ref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };
    debug!(target: "playground::cli", bytes = source.len(), "source read");

    match platform::run_once(&adapter, &source, io::stdout(), io::stderr()) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn read_source(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("cannot read '{}': {e}", path.display()))
        }),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
