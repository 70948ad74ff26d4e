//! Pure update function for the TEA pattern.
//!
//! Keys are mapped onto engine inputs here; everything the engine reports
//! back is turned into notifications and decorations. Nothing in this module
//! writes to the terminal: side effects leave as [`Command`]s.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::{EngineEvent, Input};
use crate::{clog, clog_debug, clog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{Model, NotificationLevel};

const EASTER_EGG_MESSAGE: &str = "🦇⚡ BATMAN MODE ACTIVATED! ⚡🦇";

/// Map a key press to an engine input. Keys that are not calculator keys
/// return `None` and never reach the engine.
pub fn input_for_key(key: &KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Enter => Some(Input::Equals),
        KeyCode::Esc => Some(Input::Clear),
        KeyCode::Backspace | KeyCode::Delete => Some(Input::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Input::from_char(c),
        _ => None,
    }
}

/// Pure update function: Model + Message → Commands
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            if key.kind == KeyEventKind::Press {
                update_key(model, key, Instant::now(), &mut cmds);
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true;
        }

        Message::Tick(now) => update_tick(model, now),
    }

    cmds
}

fn update_key(model: &mut Model, key: KeyEvent, now: Instant, cmds: &mut Vec<Command>) {
    model.notification = None; // Clear notification on any key press
    model.dirty = true;

    if model.konami.push(key.code) {
        clog!("Easter egg activated");
        model.notify(NotificationLevel::Info, EASTER_EGG_MESSAGE.to_string(), now);
        if model.config.effects {
            model.effects.bat_signal(now);
        }
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            cmds.push(Command::Quit);
            return;
        }
        KeyCode::Char('q') => {
            cmds.push(Command::Quit);
            return;
        }
        KeyCode::Char('?') => {
            model.show_keymap = !model.show_keymap;
            return;
        }
        _ => {}
    }

    let Some(input) = input_for_key(&key) else {
        return;
    };

    model.last_input = Some(input);
    if matches!(
        input,
        Input::Digit(_) | Input::DecimalPoint | Input::Operator(_)
    ) {
        if model.config.effects {
            model.effects.sparkle(now);
        }
        if model.config.sound {
            cmds.push(Command::Bell);
        }
    }

    for event in model.engine.handle(input) {
        apply_event(model, event, now);
    }
}

/// React to something the engine reported.
fn apply_event(model: &mut Model, event: EngineEvent, now: Instant) {
    clog_debug!("Engine event: {:?}", event);
    match event {
        EngineEvent::Error { message } => {
            clog_warn!("UI Error: {}", message);
            model.notify(NotificationLevel::Error, message, now);
        }
        EngineEvent::ResultComputed { .. } => {
            if model.config.effects {
                model.effects.celebrate(now);
            }
        }
        EngineEvent::Cleared => {
            if model.config.effects {
                model.effects.bounce(now);
            }
        }
    }
}

fn update_tick(model: &mut Model, now: Instant) {
    if model
        .notification
        .as_ref()
        .is_some_and(|n| n.is_expired(now))
    {
        model.notification = None;
        model.dirty = true;
    }

    if model.effects.prune(now) {
        model.dirty = true;
    }
    // Live effects animate every tick
    if !model.effects.is_empty() {
        model.dirty = true;
    }
}
