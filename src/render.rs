use std::sync::atomic::{AtomicU64, Ordering};

use crate::effects::EffectView;
use crate::engine::{format_number, Input, Mode, Operator};
use crate::tea::Notification;

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Running accumulator as shown under the display, e.g. `5 ×`.
pub fn accumulator_hint(previous: Option<f64>, operator: Option<Operator>) -> Option<String> {
    match (previous, operator) {
        (Some(value), Some(op)) => Some(format!("{} {}", format_number(value), op)),
        (Some(value), None) => Some(format_number(value)),
        (None, _) => None,
    }
}

/// Immutable snapshot handed from the logic thread to the render thread.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    /// Engine render text.
    pub display: String,
    pub accumulator: Option<String>,
    pub mode: Mode,
    pub notification: Option<Notification>,
    pub effects: Vec<EffectView>,
    /// Display is mid-bounce after a clear.
    pub bouncing: bool,
    /// Last input that reached the engine, highlighted on the keypad.
    pub last_input: Option<Input>,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,
    pub sound_enabled: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            display: "0".to_string(),
            accumulator: None,
            mode: Mode::Entering,
            notification: None,
            effects: Vec::new(),
            bouncing: false,
            last_input: None,
            show_keymap: false,
            sound_enabled: false,
        }
    }
}
