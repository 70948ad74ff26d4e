//! Input events consumed by the engine and events it emits back.

use serde::Serialize;

use super::operator::Operator;

/// A discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Input {
    /// Map a typed character to an input. Unrecognized characters return
    /// `None` and never reach the engine.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Input::Digit(c)),
            '.' => Some(Input::DecimalPoint),
            '=' => Some(Input::Equals),
            'c' | 'C' => Some(Input::Clear),
            _ => Operator::from_char(c).map(Input::Operator),
        }
    }

    /// Label of the keypad button for this input.
    pub fn label(&self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::DecimalPoint => ".".to_string(),
            Input::Operator(op) => op.glyph().to_string(),
            Input::Equals => "=".to_string(),
            Input::Clear => "C".to_string(),
            Input::Backspace => "DEL".to_string(),
        }
    }
}

/// Notification emitted to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A recovered error that should be shown to the user briefly.
    Error { message: String },
    /// `=` produced a result.
    ResultComputed { value: f64 },
    /// All state was reset.
    Cleared,
}

impl EngineEvent {
    pub fn is_error(&self) -> bool {
        matches!(self, EngineEvent::Error { .. })
    }
}
