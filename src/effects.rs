//! Decorative, time-bounded effects for the presentation layer.
//!
//! Effects are fire-and-forget: they are scheduled in response to engine
//! events, age out on their own, and never touch engine state. Glyphs rotate
//! through fixed palettes so rendering stays deterministic.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

const KEY_PALETTE: [&str; 5] = ["⚡", "🦇", "🖤", "✨", "🌆"];
const CELEBRATION: [&str; 5] = ["🎆", "⚡", "🌆", "✨", "🦇"];
const BAT_SIGNAL: [&str; 8] = ["🦇", "🖤", "⚡", "🌆", "🌟", "🌌", "🌙", "⭐"];

const GLYPH_LIFETIME: Duration = Duration::from_millis(1000);
const CELEBRATION_STAGGER: Duration = Duration::from_millis(100);
const BAT_SIGNAL_COUNT: usize = 10;
const BAT_SIGNAL_STAGGER: Duration = Duration::from_millis(150);
const BOUNCE_LIFETIME: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Single glyph on a keystroke.
    Sparkle,
    /// Staggered burst after a result.
    Celebrate,
    /// Display shake after clear.
    Bounce,
    /// Easter egg shower.
    BatSignal,
}

#[derive(Debug, Clone)]
struct Effect {
    kind: EffectKind,
    glyph: &'static str,
    starts_at: Instant,
    expires_at: Instant,
}

impl Effect {
    fn progress(&self, now: Instant) -> f32 {
        let total = self.expires_at.duration_since(self.starts_at).as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        (now.saturating_duration_since(self.starts_at).as_secs_f32() / total).min(1.0)
    }
}

/// What the renderer needs to draw one effect.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectView {
    pub kind: EffectKind,
    pub glyph: &'static str,
    /// 0.0 when it appears, 1.0 when it is gone.
    pub progress: f32,
}

#[derive(Debug, Default)]
pub struct Effects {
    active: Vec<Effect>,
    cursor: usize,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sparkle(&mut self, now: Instant) {
        let glyph = KEY_PALETTE[self.cursor % KEY_PALETTE.len()];
        self.cursor = self.cursor.wrapping_add(1);
        self.push(EffectKind::Sparkle, glyph, now, GLYPH_LIFETIME);
    }

    pub fn celebrate(&mut self, now: Instant) {
        for (i, glyph) in CELEBRATION.into_iter().enumerate() {
            let start = now + CELEBRATION_STAGGER * i as u32;
            self.push(EffectKind::Celebrate, glyph, start, GLYPH_LIFETIME);
        }
    }

    pub fn bounce(&mut self, now: Instant) {
        // Restart rather than stack
        self.active.retain(|e| e.kind != EffectKind::Bounce);
        self.push(EffectKind::Bounce, "", now, BOUNCE_LIFETIME);
    }

    pub fn bat_signal(&mut self, now: Instant) {
        for i in 0..BAT_SIGNAL_COUNT {
            let glyph = BAT_SIGNAL[(self.cursor + i) % BAT_SIGNAL.len()];
            let start = now + BAT_SIGNAL_STAGGER * i as u32;
            self.push(EffectKind::BatSignal, glyph, start, GLYPH_LIFETIME);
        }
        self.cursor = self.cursor.wrapping_add(BAT_SIGNAL_COUNT);
    }

    /// Drop expired effects. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.active.len();
        self.active.retain(|e| e.expires_at > now);
        self.active.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_bouncing(&self, now: Instant) -> bool {
        self.active
            .iter()
            .any(|e| e.kind == EffectKind::Bounce && e.starts_at <= now && e.expires_at > now)
    }

    /// Glyph effects that have started and not yet expired, oldest first.
    pub fn visible(&self, now: Instant) -> Vec<EffectView> {
        self.active
            .iter()
            .filter(|e| e.kind != EffectKind::Bounce)
            .filter(|e| e.starts_at <= now && e.expires_at > now)
            .map(|e| EffectView {
                kind: e.kind,
                glyph: e.glyph,
                progress: e.progress(now),
            })
            .collect()
    }

    fn push(&mut self, kind: EffectKind, glyph: &'static str, start: Instant, lifetime: Duration) {
        self.active.push(Effect {
            kind,
            glyph,
            starts_at: start,
            expires_at: start + lifetime,
        });
    }
}

/// ↑ ↑ ↓ ↓ ← → ← → b a
const KONAMI: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

/// Watches every key press for the Konami sequence.
#[derive(Debug, Default)]
pub struct KonamiDetector {
    recent: VecDeque<KeyCode>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key. Returns true when the sequence just completed.
    pub fn push(&mut self, code: KeyCode) -> bool {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.recent.push_back(code);
        if self.recent.len() > KONAMI.len() {
            self.recent.pop_front();
        }

        if self.recent.iter().eq(KONAMI.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }
}
