//! Platform adapters: terminal formatting and the interactive session

mod cli;
pub mod repl;

pub use cli::{format_failure, run_once, Outcome};
