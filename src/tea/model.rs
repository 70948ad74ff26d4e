//! Model for the TEA pattern.
//!
//! The Model is pure application state: the expression engine plus what the
//! presentation layer keeps around it. No channels, no terminal handles.

use std::time::Instant;

use crate::config::Config;
use crate::effects::{Effects, KonamiDetector};
use crate::engine::{ExpressionEngine, Input};
use crate::render::{accumulator_hint, next_version, RenderState};

/// Level of a notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Displayed in red with "Error:" prefix
    Error,
    /// Displayed in green
    Info,
}

/// A temporary message shown over the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub expires_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub struct Model {
    pub engine: ExpressionEngine,

    // Presentation state
    pub notification: Option<Notification>,
    pub effects: Effects,
    pub konami: KonamiDetector,
    pub last_input: Option<Input>,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self {
            engine: ExpressionEngine::new().with_scientific_threshold(config.scientific_threshold),
            notification: None,
            effects: Effects::new(),
            konami: KonamiDetector::new(),
            last_input: None,
            show_keymap: false,
            dirty: true,
            config,
        }
    }

    /// Show a notification for the configured duration.
    pub fn notify(&mut self, level: NotificationLevel, message: String, now: Instant) {
        self.notification = Some(Notification {
            level,
            message,
            expires_at: now + self.config.notification_duration(),
        });
        self.dirty = true;
    }

    pub fn snapshot(&self) -> RenderState {
        self.snapshot_at(Instant::now())
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Each snapshot gets a new version so the render thread can skip
    /// redundant frames.
    pub fn snapshot_at(&self, now: Instant) -> RenderState {
        RenderState {
            version: next_version(),
            display: self.engine.render_text(),
            accumulator: accumulator_hint(self.engine.previous_input(), self.engine.operator()),
            mode: self.engine.mode(),
            notification: self.notification.clone(),
            effects: self.effects.visible(now),
            bouncing: self.effects.is_bouncing(now),
            last_input: self.last_input,
            show_keymap: self.show_keymap,
            sound_enabled: self.config.sound,
        }
    }
}
