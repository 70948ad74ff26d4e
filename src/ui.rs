//! Terminal UI rendering for the calculator.
//!
//! Layout, top to bottom: effect strip, display, separator, keypad, status
//! bar. Minimal chrome: no boxes, whitespace as structure, one gold accent for
//! the display.
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::effects::{EffectKind, EffectView};
use crate::engine::{Input, Mode, Operator};
use crate::render::RenderState;
use crate::tea::{Notification, NotificationLevel};

const COLOR_DISPLAY: Color = Color::Rgb(255, 215, 0);
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_SEPARATOR: Color = Color::White;
const COLOR_OPERATOR_KEY: Color = Color::Yellow;

const EFFECT_HEIGHT: u16 = 1;
const DISPLAY_HEIGHT: u16 = 2;
const KEY_WIDTH: usize = 7;

/// Keypad rows as drawn on screen.
const KEYPAD: &[&[Input]] = &[
    &[
        Input::Clear,
        Input::Backspace,
        Input::Operator(Operator::Divide),
        Input::Operator(Operator::Multiply),
    ],
    &[
        Input::Digit('7'),
        Input::Digit('8'),
        Input::Digit('9'),
        Input::Operator(Operator::Subtract),
    ],
    &[
        Input::Digit('4'),
        Input::Digit('5'),
        Input::Digit('6'),
        Input::Operator(Operator::Add),
    ],
    &[
        Input::Digit('1'),
        Input::Digit('2'),
        Input::Digit('3'),
        Input::Equals,
    ],
    &[Input::Digit('0'), Input::DecimalPoint],
];

// -----------------------------------------------------------------------------
// Context-sensitive keymap
// -----------------------------------------------------------------------------

/// Which keybindings the legend shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapContext {
    /// Typing an operand: backspace deletes a character.
    Entering,
    /// After an operator or result: backspace clears everything.
    PendingOperator,
}

impl KeymapContext {
    pub fn from_render_state(state: &RenderState) -> Self {
        match state.mode {
            Mode::Entering => KeymapContext::Entering,
            Mode::PendingOperator => KeymapContext::PendingOperator,
        }
    }
}

/// A single keybinding entry for display.
struct Keybinding(&'static str, &'static str);

/// A group of related keybindings (separated by │).
struct KeybindingGroup(Vec<Keybinding>);

fn keybindings_for_context(ctx: KeymapContext) -> Vec<KeybindingGroup> {
    let backspace = match ctx {
        KeymapContext::Entering => Keybinding("Bksp", "delete"),
        KeymapContext::PendingOperator => Keybinding("Bksp", "clear"),
    };
    vec![
        KeybindingGroup(vec![Keybinding("0-9 .", "number")]),
        KeybindingGroup(vec![
            Keybinding("+ - * /", "operator"),
            Keybinding("Enter", "equals"),
        ]),
        KeybindingGroup(vec![backspace, Keybinding("Esc", "clear")]),
        KeybindingGroup(vec![Keybinding("q", "quit")]),
    ]
}

/// Main render function - entry point for all UI drawing.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    render_main_layout(frame, state);

    if let Some(ref notification) = state.notification {
        render_notification(frame, notification, frame.area());
    }
}

fn render_main_layout(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();

    if area.height < DISPLAY_HEIGHT + 1 {
        render_display(frame, state, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(EFFECT_HEIGHT),
        Constraint::Length(DISPLAY_HEIGHT),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_effects(frame, &state.effects, chunks[0]);
    render_display(frame, state, chunks[1]);
    render_separator(frame, chunks[2]);
    render_keypad(frame, state.last_input, chunks[3]);
    render_statusbar(frame, state, chunks[4]);
}

/// Effect glyphs spread across one line, fading as they age.
fn render_effects(frame: &mut Frame, effects: &[EffectView], area: Rect) {
    if effects.is_empty() || area.width == 0 {
        return;
    }
    let line = effect_line(effects, area.width);
    frame.render_widget(Paragraph::new(line), area);
}

fn effect_line(effects: &[EffectView], width: u16) -> Line<'static> {
    let slot = (width as usize / effects.len().max(1)).max(3);
    let spans: Vec<Span> = effects
        .iter()
        .enumerate()
        .take(width as usize / slot)
        .flat_map(|(i, effect)| {
            // Sparkles drift right as they fade; everything else stays in its slot
            let drift = match effect.kind {
                EffectKind::Sparkle => (effect.progress * 2.0) as usize,
                _ => 0,
            };
            let pad = if i == 0 { slot / 2 } else { slot - 2 };
            vec![
                Span::raw(" ".repeat(pad + drift)),
                Span::styled(effect.glyph, effect_style(effect.progress)),
            ]
        })
        .collect();
    Line::from(spans)
}

fn effect_style(progress: f32) -> Style {
    if progress > 0.6 {
        Style::default().fg(COLOR_TEXT_MUTED)
    } else {
        Style::default()
    }
}

/// Display: render text right-aligned, accumulator hint below.
fn render_display(frame: &mut Frame, state: &RenderState, area: Rect) {
    let width = area.width as usize;
    // Shift left by two columns while bouncing
    let inset = if state.bouncing { 3 } else { 1 };
    let text = tail_fit(&state.display, width.saturating_sub(inset));

    let display = Line::from(vec![
        Span::styled(
            text,
            Style::default()
                .fg(COLOR_DISPLAY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(inset)),
    ])
    .alignment(Alignment::Right);

    let hint = Line::from(Span::styled(
        state.accumulator.clone().unwrap_or_default(),
        Style::default().fg(COLOR_TEXT_MUTED),
    ))
    .alignment(Alignment::Right);

    frame.render_widget(Paragraph::new(vec![display, hint]), area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let solid = "─".repeat(area.width as usize);
    let line = Line::from(Span::styled(solid, Style::default().fg(COLOR_SEPARATOR)));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_keypad(frame: &mut Frame, last_input: Option<Input>, area: Rect) {
    let lines: Vec<Line> = KEYPAD
        .iter()
        .take(area.height as usize)
        .map(|row| keypad_row(row, last_input))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn keypad_row(row: &[Input], last_input: Option<Input>) -> Line<'static> {
    let spans: Vec<Span> = row
        .iter()
        .map(|input| {
            let label = format!("{:^width$}", input.label(), width = KEY_WIDTH);
            let mut style = match input {
                Input::Operator(_) | Input::Equals => Style::default().fg(COLOR_OPERATOR_KEY),
                Input::Clear | Input::Backspace => Style::default().fg(COLOR_TEXT_DIMMED),
                _ => Style::default(),
            };
            if Some(*input) == last_input {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Span::styled(label, style)
        })
        .collect();
    Line::from(spans)
}

/// Bottom line: "?" when collapsed, "? │ <keymap>" when expanded, and a
/// SOUND badge on the right when the bell is on.
fn render_statusbar(frame: &mut Frame, state: &RenderState, area: Rect) {
    frame.render_widget(Paragraph::new(render_keymap_line(state, area.width)), area);
}

fn render_keymap_line(state: &RenderState, width: u16) -> Line<'static> {
    let groups = keybindings_for_context(KeymapContext::from_render_state(state));

    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    let help_style = if state.show_keymap {
        Style::default()
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    };
    let mut spans: Vec<Span> = vec![Span::styled("?", help_style)];

    if state.show_keymap {
        for group in &groups {
            spans.push(Span::styled(" │ ", sep_style));
            for (key_idx, keybinding) in group.0.iter().enumerate() {
                if key_idx > 0 {
                    spans.push(Span::styled(" • ", sep_style));
                }
                spans.push(Span::styled(keybinding.0, key_style));
                spans.push(Span::styled(format!(" {}", keybinding.1), desc_style));
            }
        }
    }

    if state.sound_enabled {
        let badge = " SOUND ";
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let spacer_width = (width as usize)
            .saturating_sub(content_width)
            .saturating_sub(badge.len());
        if spacer_width > 0 {
            spans.push(Span::raw(" ".repeat(spacer_width)));
        }
        spans.push(Span::styled(
            badge,
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

/// Render notification message on the bottom line of the screen.
///
/// - Error: Red text with "Error:" prefix and bold styling
/// - Info: Green text without prefix
fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    let notification_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, notification_area);

    let line = match notification.level {
        NotificationLevel::Error => Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(Color::Red),
            ),
        ]),
        NotificationLevel::Info => Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::Green),
        )),
    };

    frame.render_widget(Paragraph::new(line), notification_area);
}

/// Keep the end of `s` visible, so long expressions scroll left as they grow.
fn tail_fit(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let tail: String = s.chars().skip(count - (max_len - 1)).collect();
    format!("…{}", tail)
}
