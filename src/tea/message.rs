//! Messages for the TEA pattern.
//!
//! Messages come from the terminal (keys, resize) or from the ticker actor.

use std::time::Instant;

use crossterm::event::KeyEvent;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Periodic clock used to expire notifications and effects.
    Tick(Instant),
}
