//! Update loop, notifications and effects.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use batcalc::config::Config;
use batcalc::engine::Mode;
use batcalc::tea::{update, Command, Message, Model, NotificationLevel};
use batcalc::Input;

use crate::fixtures::{key, press, quiet_model};

/// Test: A full calculation through key events
/// Given a running model
/// When 12 × 3 Enter is typed
/// Then the snapshot shows the result and highlights the equals key
#[test]
fn test_calculation_through_update_loop() {
    let mut model = quiet_model();
    press(&mut model, "12x3");

    let state = model.snapshot();
    assert_eq!(state.display, "12 × 3");
    assert_eq!(state.accumulator.as_deref(), Some("12 ×"));
    assert_eq!(state.mode, Mode::Entering);

    update(&mut model, key(KeyCode::Enter));
    let state = model.snapshot();
    assert_eq!(state.display, "36");
    assert_eq!(state.accumulator, None);
    assert_eq!(state.mode, Mode::PendingOperator);
    assert_eq!(state.last_input, Some(Input::Equals));
}

/// Test: Divide by zero notification lifecycle
/// Given 8 / 0 =
/// Then an error notification is shown
/// And it disappears once a tick passes its expiry
#[test]
fn test_error_notification_lifecycle() {
    let config = Config {
        effects: false,
        notification_ms: 500,
        ..Config::default()
    };
    let mut model = Model::new(config);
    press(&mut model, "8/0=");

    let state = model.snapshot();
    let notification = state.notification.expect("error notification");
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(notification.message, "Can't divide by zero! 🦇⚡");
    assert_eq!(state.display, "8");

    update(
        &mut model,
        Message::Tick(notification.expires_at + Duration::from_millis(1)),
    );
    assert!(model.snapshot().notification.is_none());
}

#[test]
fn test_backspace_key_deletes_and_clears() {
    let mut model = quiet_model();
    press(&mut model, "45");
    update(&mut model, key(KeyCode::Backspace));
    assert_eq!(model.snapshot().display, "4");

    press(&mut model, "+");
    update(&mut model, key(KeyCode::Backspace));
    assert_eq!(model.snapshot().display, "0");
}

/// Test: Decorations never touch the engine
/// Given effects enabled
/// When keys and results are processed and the effects play out
/// Then the engine state is what the same keys produce with effects off
#[test]
fn test_effects_do_not_change_engine_state() {
    let mut decorated = Model::new(Config::default());
    let mut plain = quiet_model();

    for model in [&mut decorated, &mut plain] {
        press(model, "7-2=*3");
        update(model, Message::Tick(Instant::now() + Duration::from_secs(3)));
    }

    assert_eq!(decorated.engine.state(), plain.engine.state());
    assert!(decorated.effects.is_empty(), "effects expire on tick");
}

#[test]
fn test_snapshot_carries_effects_while_live() {
    let mut model = Model::new(Config::default());
    press(&mut model, "1+1=");

    let state = model.snapshot();
    assert!(!state.effects.is_empty());

    let later = Instant::now() + Duration::from_secs(5);
    assert!(model.snapshot_at(later).effects.is_empty());
}

#[test]
fn test_konami_code_in_the_middle_of_a_calculation() {
    let mut model = quiet_model();
    press(&mut model, "5+");
    for code in [
        KeyCode::Up,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Left,
        KeyCode::Right,
    ] {
        update(&mut model, key(code));
    }
    update(&mut model, key(KeyCode::Char('b')));
    update(&mut model, key(KeyCode::Char('a')));

    let state = model.snapshot();
    let notification = state.notification.expect("easter egg notification");
    assert_eq!(notification.level, NotificationLevel::Info);
    // Arrow keys and letters are not calculator keys
    assert_eq!(state.display, "5 + ");

    press(&mut model, "5=");
    assert_eq!(model.snapshot().display, "10");
}

#[test]
fn test_sound_config_rings_bell() {
    let mut model = Model::new(Config {
        effects: false,
        sound: true,
        ..Config::default()
    });
    let cmds = press(&mut model, "9.");
    assert_eq!(cmds, vec![Command::Bell, Command::Bell]);
    assert!(model.snapshot().sound_enabled);
}

#[test]
fn test_quit_keys() {
    let mut model = quiet_model();
    assert_eq!(press(&mut model, "q"), vec![Command::Quit]);
}
