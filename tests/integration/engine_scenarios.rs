//! Calculator behavior over whole key sequences.

use batcalc::engine::{Mode, Operator};
use batcalc::{EngineEvent, ExpressionEngine};

use crate::fixtures::{engine_after, error_count, type_keys};

/// Test: No leading redundant zero
/// Given a fresh engine showing "0"
/// When a digit is typed
/// Then the digit replaces the zero
#[test]
fn test_leading_zero_is_replaced() {
    for d in '0'..='9' {
        let engine = engine_after(&d.to_string());
        assert_eq!(engine.current_input(), d.to_string());
    }
    assert_eq!(engine_after("007").current_input(), "7");
}

/// Test: Decimal point is idempotent per operand
#[test]
fn test_decimal_point_once_per_operand() {
    assert_eq!(engine_after("1...5").current_input(), "1.5");
    assert_eq!(engine_after(".").current_input(), "0.");
    // A new operand gets its own decimal point
    assert_eq!(engine_after("1.5+.2").render_text(), "1.5 + 0.2");
}

/// Test: Strict left-to-right evaluation
/// Given 2 + 3 × 4
/// When equals is pressed
/// Then the result is (2 + 3) × 4 = 20, not 14
#[test]
fn test_left_to_right_evaluation() {
    let engine = engine_after("2+3*4=");
    assert_eq!(engine.current_input(), "20");
    assert_eq!(engine.render_text(), "20");
}

#[test]
fn test_chain_shows_expression_and_accumulator() {
    let engine = engine_after("2+3*4");
    assert_eq!(engine.render_text(), "2 + 3 × 4");
    assert_eq!(engine.previous_input(), Some(5.0));
    assert_eq!(engine.operator(), Some(Operator::Multiply));
}

/// Test: Divide by zero recovers to the left operand
/// Given 8 / 0
/// When equals is pressed
/// Then the display shows 8 and exactly one error is raised
#[test]
fn test_divide_by_zero_recovers() {
    let mut engine = ExpressionEngine::new();
    let events = type_keys(&mut engine, "8/0=");

    assert_eq!(engine.current_input(), "8");
    assert_eq!(error_count(&events), 1);
    assert_eq!(
        events[0],
        EngineEvent::Error {
            message: "Can't divide by zero! 🦇⚡".to_string()
        }
    );
}

#[test]
fn test_divide_by_zero_mid_chain_continues() {
    let mut engine = ExpressionEngine::new();
    let events = type_keys(&mut engine, "8/0+2=");
    assert_eq!(engine.current_input(), "10");
    assert_eq!(error_count(&events), 1);
}

/// Test: Clear resets to a fresh engine from any state
#[test]
fn test_clear_equals_fresh_engine() {
    let fresh = ExpressionEngine::new().state();
    for keys in ["", "123", "1.5+", "2+3*4", "2+3=", "8/0=", "9-"] {
        let mut engine = engine_after(keys);
        engine.clear();
        assert_eq!(engine.state(), fresh, "clear after {keys:?}");
        assert_eq!(engine.render_text(), "0");
    }
}

/// Test: Backspace right after an operator clears everything
#[test]
fn test_backspace_after_operator_clears() {
    let mut with_backspace = engine_after("12+");
    with_backspace.delete_last();

    let mut with_clear = engine_after("12+");
    with_clear.clear();

    assert_eq!(with_backspace.state(), with_clear.state());
}

/// Test: Backspace only edits the display side
/// Given 12 + 3
/// When backspace removes the 3 and then equals is pressed
/// Then the pending addition applies to 12, giving 24
#[test]
fn test_backspace_over_operand_keeps_pending_operator() {
    let mut engine = engine_after("12+3");
    engine.delete_last();
    assert_eq!(engine.render_text(), "12");
    assert_eq!(engine.previous_input(), Some(12.0));
    assert_eq!(engine.operator(), Some(Operator::Add));

    type_keys(&mut engine, "=");
    assert_eq!(engine.current_input(), "24");
}

/// Test: Backspace inside a chain keeps the running total
/// Given 2 + 3 × 4
/// When backspace removes the 4 and then equals is pressed
/// Then the running total 5 is multiplied by the 3 left on screen
#[test]
fn test_backspace_in_chain_then_equals() {
    let mut engine = engine_after("2+3*4");
    engine.delete_last();
    assert_eq!(engine.render_text(), "2 + 3");
    assert_eq!(engine.previous_input(), Some(5.0));
    assert_eq!(engine.operator(), Some(Operator::Multiply));
    assert_eq!(engine.mode(), Mode::Entering);

    type_keys(&mut engine, "=");
    assert_eq!(engine.current_input(), "15");
}

#[test]
fn test_backspace_to_empty_shows_zero() {
    let mut engine = engine_after("7");
    engine.delete_last();
    assert_eq!(engine.current_input(), "0");
    assert_eq!(engine.render_text(), "0");
}

/// Test: Floating point noise is rounded away
#[test]
fn test_point_one_plus_point_two() {
    assert_eq!(engine_after("0.1+0.2=").current_input(), "0.3");
    assert_eq!(engine_after("1/3=").current_input(), "0.3333333333");
}

/// Test: Long numeric display switches to exponential form
#[test]
fn test_long_number_goes_exponential() {
    let engine = engine_after("1234567890=");
    assert_eq!(engine.render_text(), "1.234568e+9");
    // The stored value is untouched
    assert_eq!(engine.current_input(), "1234567890");
}

#[test]
fn test_large_result_goes_exponential() {
    let engine = engine_after("99999*99999=");
    assert_eq!(engine.current_input(), "9999800001");
    assert_eq!(engine.render_text(), "9.999800e+9");
}

#[test]
fn test_threshold_is_configurable() {
    let mut engine = ExpressionEngine::new().with_scientific_threshold(12);
    type_keys(&mut engine, "1234567890");
    assert_eq!(engine.render_text(), "1234567890");
}

/// Test: Results feed the next calculation
#[test]
fn test_operator_after_result_continues() {
    let engine = engine_after("2+3=*4=");
    assert_eq!(engine.current_input(), "20");
}

#[test]
fn test_digit_after_result_starts_over() {
    let engine = engine_after("2+3=7");
    assert_eq!(engine.render_text(), "7");
    assert_eq!(engine.previous_input(), None);
}

#[test]
fn test_decimal_after_result_starts_new_operand() {
    assert_eq!(engine_after("2+3=.5").current_input(), "0.5");
}

#[test]
fn test_negative_results() {
    let engine = engine_after("3-5=");
    assert_eq!(engine.current_input(), "-2");
    assert_eq!(engine_after("3-5=*3=").current_input(), "-6");
}

#[test]
fn test_equals_without_operator_is_noop() {
    let mut engine = engine_after("42");
    let events = type_keys(&mut engine, "==");
    assert!(events.is_empty());
    assert_eq!(engine.current_input(), "42");
}

#[test]
fn test_operator_on_fresh_engine_uses_zero() {
    let engine = engine_after("+5=");
    assert_eq!(engine.current_input(), "5");
}

#[test]
fn test_result_event_carries_value() {
    let mut engine = ExpressionEngine::new();
    let events = type_keys(&mut engine, "6*7=");
    assert_eq!(events, vec![EngineEvent::ResultComputed { value: 42.0 }]);
}

#[test]
fn test_engines_are_independent() {
    let mut a = ExpressionEngine::new();
    let mut b = ExpressionEngine::new();
    type_keys(&mut a, "1+1=");
    type_keys(&mut b, "9");
    assert_eq!(a.current_input(), "2");
    assert_eq!(b.current_input(), "9");
}
