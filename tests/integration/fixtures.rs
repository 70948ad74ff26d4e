//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - Typing key strings into an engine
//! - Building key events for the update loop

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use batcalc::config::Config;
use batcalc::tea::{update, Command, Message, Model};
use batcalc::{EngineEvent, ExpressionEngine, Input};

/// Type `keys` into `engine`, returning every event raised along the way.
pub fn type_keys(engine: &mut ExpressionEngine, keys: &str) -> Vec<EngineEvent> {
    keys.chars()
        .filter_map(Input::from_char)
        .flat_map(|input| engine.handle(input))
        .collect()
}

/// A fresh engine after typing `keys`.
pub fn engine_after(keys: &str) -> ExpressionEngine {
    let mut engine = ExpressionEngine::new();
    type_keys(&mut engine, keys);
    engine
}

pub fn error_count(events: &[EngineEvent]) -> usize {
    events.iter().filter(|e| e.is_error()).count()
}

pub fn key(code: KeyCode) -> Message {
    Message::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// Press every character of `keys` through the update loop.
pub fn press(model: &mut Model, keys: &str) -> Vec<Command> {
    keys.chars()
        .flat_map(|c| update(model, key(KeyCode::Char(c))))
        .collect()
}

pub fn quiet_model() -> Model {
    Model::new(Config {
        effects: false,
        ..Config::default()
    })
}
