//! Binary operators and their arithmetic.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph shown in the expression.
    pub fn glyph(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Map a typed character to an operator. Accepts both ASCII and display glyphs.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operator as IEEE-754 double arithmetic.
    ///
    /// Division by exactly zero is the only failure.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide if b == 0.0 => Err(Error::DivideByZero),
            Operator::Divide => Ok(a / b),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
