//! Expression engine: folds keystrokes into a display expression and a
//! left-to-right accumulator.
//!
//! There is no operator precedence. `2 + 3 × 4` is `(2 + 3) × 4 = 20`: each
//! operator commits the pending one against the accumulator before it is
//! recorded. The visible expression keeps the keystrokes as typed, while the
//! intermediate results only advance the accumulator.
//!
//! The engine is renderer-agnostic. Anything the presentation layer may want
//! to react to (errors, results, resets) is queued as an [`EngineEvent`] and
//! drained by the caller.

pub mod format;
pub mod input;
pub mod operator;

use serde::Serialize;

use crate::{clog_debug, clog_trace, clog_warn};

pub use format::{display_text, format_number, round_result};
pub use input::{EngineEvent, Input};
pub use operator::Operator;

use format::parse_operand;

/// Default length at which numeric display text goes exponential.
pub const DEFAULT_SCIENTIFIC_THRESHOLD: usize = 10;

/// Logical mode of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Building the current operand digit by digit.
    Entering,
    /// Right after an operator or a result; the next digit starts a new operand.
    PendingOperator,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Operand(String),
    Operator(Operator),
}

impl Token {
    fn text(&self) -> &str {
        match self {
            Token::Operand(text) => text,
            Token::Operator(op) => op.glyph(),
        }
    }
}

/// Observable engine state, for comparisons and serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineState {
    pub current_input: String,
    pub expression: String,
    pub previous_input: Option<f64>,
    pub operator: Option<Operator>,
    pub waiting_for_new_input: bool,
}

#[derive(Debug, Clone)]
pub struct ExpressionEngine {
    current_input: String,
    /// Operands and operators in typed order. Every operator is followed by
    /// an operand token, empty until the first digit arrives.
    tokens: Vec<Token>,
    previous_input: Option<f64>,
    operator: Option<Operator>,
    waiting_for_new_input: bool,
    scientific_threshold: usize,
    events: Vec<EngineEvent>,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            tokens: Vec::new(),
            previous_input: None,
            operator: None,
            waiting_for_new_input: false,
            scientific_threshold: DEFAULT_SCIENTIFIC_THRESHOLD,
            events: Vec::new(),
        }
    }

    pub fn with_scientific_threshold(mut self, threshold: usize) -> Self {
        self.scientific_threshold = threshold;
        self
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// The expression as typed, tokens joined by single spaces.
    pub fn expression(&self) -> String {
        self.tokens
            .iter()
            .map(Token::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn previous_input(&self) -> Option<f64> {
        self.previous_input
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_waiting_for_new_input(&self) -> bool {
        self.waiting_for_new_input
    }

    pub fn mode(&self) -> Mode {
        if self.waiting_for_new_input {
            Mode::PendingOperator
        } else {
            Mode::Entering
        }
    }

    pub fn state(&self) -> EngineState {
        EngineState {
            current_input: self.current_input.clone(),
            expression: self.expression(),
            previous_input: self.previous_input,
            operator: self.operator,
            waiting_for_new_input: self.waiting_for_new_input,
        }
    }

    /// Text for the display. Side-effect free.
    pub fn render_text(&self) -> String {
        let expression = self.expression();
        let text = if expression.is_empty() {
            self.current_input.as_str()
        } else {
            expression.as_str()
        };
        display_text(text, self.scientific_threshold)
    }

    /// Process one input to completion and return the events it raised.
    pub fn handle(&mut self, input: Input) -> Vec<EngineEvent> {
        match input {
            Input::Digit(d) => self.append_digit(d),
            Input::DecimalPoint => self.append_decimal(),
            Input::Operator(op) => self.set_operator(op),
            Input::Equals => self.evaluate(),
            Input::Clear => self.clear(),
            Input::Backspace => self.delete_last(),
        }
        clog_trace!("Engine after {:?}: {:?}", input, self.state());
        self.take_events()
    }

    /// Drain queued events.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn append_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        self.begin_operand_if_waiting();

        if self.replaces_on_entry() {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit);
        }
        self.sync_last_operand();
    }

    pub fn append_decimal(&mut self) {
        self.begin_operand_if_waiting();

        if self.current_input.is_empty() || self.replaces_on_entry() {
            self.current_input = "0.".to_string();
        } else if !self.current_input.contains(['.', 'e']) {
            self.current_input.push('.');
        }
        self.sync_last_operand();
    }

    pub fn set_operator(&mut self, op: Operator) {
        let input_value = parse_operand(&self.current_input);

        match (self.previous_input, self.operator) {
            (None, _) => {
                self.previous_input = Some(input_value);
                if self.tokens.is_empty() {
                    self.tokens
                        .push(Token::Operand(self.current_input.clone()));
                }
            }
            (Some(previous), Some(pending)) => {
                let result = round_result(self.apply(pending, previous, input_value));
                clog_debug!(
                    "Engine: chained {} {} {} = {}",
                    previous,
                    pending,
                    input_value,
                    result
                );
                self.current_input = format_number(result);
                self.previous_input = Some(result);
            }
            (Some(_), None) => {}
        }

        self.tokens.push(Token::Operator(op));
        self.tokens.push(Token::Operand(String::new()));
        self.operator = Some(op);
        self.waiting_for_new_input = true;
    }

    /// The `=` action. Does nothing unless an operand and operator are pending.
    pub fn evaluate(&mut self) {
        let (Some(previous), Some(op)) = (self.previous_input, self.operator) else {
            return;
        };
        let input_value = parse_operand(&self.current_input);
        let result = round_result(self.apply(op, previous, input_value));
        let text = format_number(result);
        clog_debug!(
            "Engine: evaluate {} {} {} = {}",
            previous,
            op,
            input_value,
            text
        );

        self.tokens = vec![Token::Operand(text.clone())];
        self.current_input = text;
        self.previous_input = None;
        self.operator = None;
        self.waiting_for_new_input = true;
        self.events.push(EngineEvent::ResultComputed { value: result });
    }

    pub fn delete_last(&mut self) {
        if self.waiting_for_new_input {
            self.clear();
            return;
        }

        if self.tokens.len() > 1 {
            if let Some(Token::Operand(text)) = self.tokens.last_mut() {
                text.pop();
            }
            // An emptied operand takes its operator with it. The accumulator
            // stays as it is: `=` still applies the pending operator.
            if matches!(self.tokens.last(), Some(Token::Operand(text)) if text.is_empty()) {
                self.tokens.pop();
                self.tokens.pop();
            }
            self.current_input = match self.tokens.last() {
                Some(Token::Operand(text)) if !text.is_empty() => text.clone(),
                _ => "0".to_string(),
            };
        } else {
            self.current_input.pop();
            if self.current_input.parse::<f64>().is_err() {
                self.current_input = "0".to_string();
                self.tokens.clear();
            } else {
                self.tokens = vec![Token::Operand(self.current_input.clone())];
            }
        }
    }

    pub fn clear(&mut self) {
        self.current_input = "0".to_string();
        self.tokens.clear();
        self.previous_input = None;
        self.operator = None;
        self.waiting_for_new_input = false;
        self.events.push(EngineEvent::Cleared);
    }

    /// Apply `op`, recovering from divide-by-zero by keeping `a`.
    fn apply(&mut self, op: Operator, a: f64, b: f64) -> f64 {
        match op.apply(a, b) {
            Ok(value) => value,
            Err(err) => {
                clog_warn!("Engine: {} {} {} failed: {}", a, op, b, err);
                self.events.push(EngineEvent::Error {
                    message: err.to_string(),
                });
                a
            }
        }
    }

    fn begin_operand_if_waiting(&mut self) {
        if self.waiting_for_new_input {
            self.current_input.clear();
            self.waiting_for_new_input = false;
        }
    }

    /// The sentinel `"0"` and non-finite results are replaced, not extended.
    fn replaces_on_entry(&self) -> bool {
        self.current_input == "0"
            || matches!(self.current_input.parse::<f64>(), Ok(v) if !v.is_finite())
    }

    fn sync_last_operand(&mut self) {
        match self.tokens.last_mut() {
            Some(Token::Operand(text)) => text.clone_from(&self.current_input),
            _ => self
                .tokens
                .push(Token::Operand(self.current_input.clone())),
        }
    }
}
