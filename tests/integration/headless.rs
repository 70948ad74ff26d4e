//! The `eval` path and its JSON report.

use batcalc::engine::DEFAULT_SCIENTIFIC_THRESHOLD;
use batcalc::headless::eval_keys;

/// Test: Headless evaluation matches interactive typing
/// Given a key string
/// When it is evaluated headlessly
/// Then the report shows the same display an interactive session would
#[test]
fn test_headless_matches_engine() {
    let report = eval_keys("2+3*4=", DEFAULT_SCIENTIFIC_THRESHOLD);
    assert_eq!(report.display, "20");
    assert_eq!(report.expression, "20");
    assert_eq!(report.current_input, "20");
    assert!(report.errors.is_empty());
}

#[test]
fn test_headless_report_json() {
    let report = eval_keys("8/0=", DEFAULT_SCIENTIFIC_THRESHOLD);
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["display"], "8");
    assert_eq!(json["current_input"], "8");
    assert_eq!(json["errors"][0], "Can't divide by zero! 🦇⚡");
}

#[test]
fn test_headless_pending_expression() {
    let report = eval_keys("9-4*", DEFAULT_SCIENTIFIC_THRESHOLD);
    assert_eq!(report.display, "9 - 4 × ");
    assert_eq!(report.current_input, "5");
}

#[test]
fn test_headless_threshold() {
    assert_eq!(
        eval_keys("1234567890", DEFAULT_SCIENTIFIC_THRESHOLD).display,
        "1.234568e+9"
    );
    assert_eq!(eval_keys("1234567890", 11).display, "1234567890");
}

#[test]
fn test_headless_clear_key() {
    let report = eval_keys("123+4c", DEFAULT_SCIENTIFIC_THRESHOLD);
    assert_eq!(report.display, "0");
    assert_eq!(report.expression, "");
}
