//! Headless evaluation: feed a key string through a fresh engine, no terminal.

use serde::Serialize;

use crate::clog_debug;
use crate::engine::{EngineEvent, ExpressionEngine, Input};

/// Outcome of a headless run, printed as JSON by `batcalc eval --json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    pub display: String,
    pub expression: String,
    pub current_input: String,
    /// Error messages in the order they were raised.
    pub errors: Vec<String>,
}

/// Run every character of `keys` through `Input::from_char`. Characters that
/// are not calculator keys are skipped.
pub fn eval_keys(keys: &str, scientific_threshold: usize) -> EvalReport {
    let mut engine = ExpressionEngine::new().with_scientific_threshold(scientific_threshold);
    let mut errors = Vec::new();

    for input in keys.chars().filter_map(Input::from_char) {
        for event in engine.handle(input) {
            if let EngineEvent::Error { message } = event {
                errors.push(message);
            }
        }
    }

    let report = EvalReport {
        display: engine.render_text(),
        expression: engine.expression(),
        current_input: engine.current_input().to_string(),
        errors,
    };
    clog_debug!("eval_keys {:?} -> {:?}", keys, report);
    report
}
