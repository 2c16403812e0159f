//! State-machine integration tests
//!
//! Runs the shared verification suites through the unified driver seam and
//! replays scripted sessions from JSON event lists.

use tally::prelude::*;

// ===== Shared suites against the bare engine =====

#[test]
fn engine_runs_full_suite() {
    let mut driver = EngineDriver::new();
    run_full_suite(&mut driver);
}

#[test]
fn engine_chained_operations_have_no_precedence() {
    let mut driver = EngineDriver::new();
    press_script(&mut driver, "5+3*2=");
    assert_eq!(driver.display().primary, "16");
}

#[test]
fn engine_division_by_zero_is_terminal() {
    let mut driver = EngineDriver::new();
    press_script(&mut driver, "7/0=");
    assert_eq!(driver.display().primary, "Error");
    press_script(&mut driver, "123");
    assert_eq!(driver.display().primary, "Error");
    driver.press(InputEvent::Clear);
    assert_eq!(driver.display().primary, "0");
}

#[test]
fn engine_overflow_is_terminal_error() {
    let mut driver = EngineDriver::new();
    press_script(&mut driver, &format!("{}*9=", "9".repeat(320)));
    assert_eq!(driver.display().primary, "Error");
    press_script(&mut driver, "5");
    assert_eq!(driver.display().primary, "Error");
    driver.press(InputEvent::Clear);
    assert_eq!(driver.display().primary, "0");
}

#[test]
fn engine_floating_point_follows_doubles() {
    let mut driver = EngineDriver::new();
    press_script(&mut driver, "0.1+0.2=");
    // IEEE-754 double arithmetic, rendered as-is
    assert_eq!(driver.display().primary, "0.30000000000000004");
}

#[test]
fn engine_running_total_keeps_grouping() {
    let mut driver = EngineDriver::new();
    press_script(&mut driver, "999999+1=");
    assert_eq!(driver.display().primary, "1,000,000");
    press_script(&mut driver, "*");
    assert_eq!(driver.display().secondary, "1,000,000 ×");
}

// ===== Shared suites against the TUI app =====

#[test]
fn tui_runs_full_suite() {
    let mut driver = TuiDriver::new();
    run_full_suite(&mut driver);
}

#[test]
fn tui_and_engine_agree_on_display() {
    let mut engine = EngineDriver::new();
    let mut tui = TuiDriver::new();
    for script in ["5+3*2=", "7/0=", "005", "1234+", "9-4="] {
        engine.press(InputEvent::Clear);
        tui.press(InputEvent::Clear);
        press_script(&mut engine, script);
        press_script(&mut tui, script);
        assert_eq!(engine.display(), tui.display(), "script {script:?}");
    }
}

// ===== Scripted replay sessions =====

#[test]
fn replay_chained_session_from_json() {
    let script = r#"[
        {"digit": "5"},
        {"operator": "add"},
        {"digit": "3"},
        {"operator": "multiply"},
        {"digit": "2"},
        "equals"
    ]"#;
    let events: Vec<InputEvent> = serde_json::from_str(script).unwrap();
    let mut driver = EngineDriver::new();
    for event in events {
        driver.press(event);
    }
    assert_eq!(driver.display().primary, "16");
}

#[test]
fn replay_error_session_from_json() {
    let script = r#"[
        {"digit": "7"},
        {"operator": "divide"},
        {"digit": "0"},
        "equals",
        {"digit": "1"},
        "clear"
    ]"#;
    let events: Vec<InputEvent> = serde_json::from_str(script).unwrap();
    let mut driver = EngineDriver::new();
    for event in events {
        driver.press(event);
    }
    assert_eq!(driver.display().primary, "0");
    assert_eq!(driver.display().secondary, "");
}

#[test]
fn replay_editing_session_from_json() {
    let script = r#"[
        {"digit": "1"},
        {"digit": "2"},
        {"digit": "7"},
        "backspace",
        {"digit": "."},
        {"digit": "5"},
        {"operator": "subtract"},
        {"digit": "2"},
        "equals"
    ]"#;
    let events: Vec<InputEvent> = serde_json::from_str(script).unwrap();
    let mut driver = EngineDriver::new();
    for event in events {
        driver.press(event);
    }
    // 12.5 - 2
    assert_eq!(driver.display().primary, "10.5");
}
