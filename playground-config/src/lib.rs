//! Playground Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Playground crates.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration, usually read from `playground.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Log level for the CLI subscriber
    pub log_level: LogLevel,
    /// Diagnostic capture behavior
    pub capture: CaptureConfig,
    /// External evaluator process
    pub evaluator: EvaluatorConfig,
}

/// How diagnostics are captured during one evaluation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Forward each diagnostic to the error channel as well as capturing it
    pub forward: bool,
    /// Upper bound on captured diagnostics per evaluation; oldest are dropped first
    pub max_diagnostics: Option<usize>,
}

/// Command used to evaluate code in a child process
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Program to spawn
    pub program: String,
    /// Arguments passed before the code is written to stdin
    pub args: Vec<String>,
    /// Working directory of the child (inherits when absent)
    pub working_dir: Option<PathBuf>,
    /// Extra environment variables
    pub env: BTreeMap<String, String>,
}

/// Log verbosity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Get the string name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Parse a level name; `silent` maps to `Error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            forward: true,
            max_diagnostics: None,
        }
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            program: "ocaml".to_string(),
            args: vec!["-stdin".to_string()],
            working_dir: None,
            env: BTreeMap::new(),
        }
    }
}
