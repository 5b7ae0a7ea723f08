//! Test helpers
//!
//! A scripted evaluator that replays canned outputs and diagnostics, plus an
//! adapter constructor that keeps forwarded diagnostics off stderr.

#![allow(dead_code)]

use playground::{
    Diagnostic, DiagnosticBuffer, DiagnosticSink, EvaluationAdapter, Evaluator,
};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

/// What the evaluator does for one input
#[derive(Clone, Debug, Default)]
pub struct Script {
    pub diagnostics: Vec<Diagnostic>,
    pub output: String,
}

/// Evaluator answering from a table; unknown code yields `""` with no
/// diagnostics
#[derive(Default)]
pub struct ScriptedEvaluator {
    scripts: HashMap<String, Script>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed(mut self, code: &str, output: &str) -> Self {
        self.scripts.insert(
            code.to_string(),
            Script {
                diagnostics: Vec::new(),
                output: output.to_string(),
            },
        );
        self
    }

    pub fn fail(mut self, code: &str, diagnostics: &[&str]) -> Self {
        self.scripts.insert(
            code.to_string(),
            Script {
                diagnostics: diagnostics.iter().map(|d| Diagnostic::error(*d)).collect(),
                output: String::new(),
            },
        );
        self
    }

    pub fn script(mut self, code: &str, script: Script) -> Self {
        self.scripts.insert(code.to_string(), script);
        self
    }

    /// Code received so far, in call order
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Evaluator for ScriptedEvaluator {
    type Error = Infallible;

    fn execute(&self, code: &str, diagnostics: &dyn DiagnosticSink) -> Result<String, Infallible> {
        self.seen.lock().unwrap().push(code.to_string());
        let Some(script) = self.scripts.get(code) else {
            return Ok(String::new());
        };
        for diagnostic in &script.diagnostics {
            diagnostics.report(diagnostic.clone());
        }
        Ok(script.output.clone())
    }
}

/// Adapter whose forwarding channel is a buffer the test can inspect
pub fn adapter_with_channel(
    evaluator: ScriptedEvaluator,
) -> (EvaluationAdapter<ScriptedEvaluator>, Arc<DiagnosticBuffer>) {
    let channel = Arc::new(DiagnosticBuffer::new());
    let adapter = EvaluationAdapter::new(evaluator).with_channel(channel.clone());
    (adapter, channel)
}

/// The scenarios every adapter must handle
pub fn playground_evaluator() -> ScriptedEvaluator {
    ScriptedEvaluator::new()
        .succeed("1+1", "2")
        .fail("syntax(((", &["Error: unexpected token"])
        .fail("two", &["d1", "d2"])
}
