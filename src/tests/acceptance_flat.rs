//! Acceptance tests: laying out balusters along a flat rail.
//!
//! Each test drives the app through key presses only, then checks both the
//! state and the rendered screen.

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

#[test]
fn default_rail_shows_fifteen_balusters() {
    // GIVEN: Fresh app with default parameters
    let mut harness = AcceptanceTestHarness::new().expect("harness");

    // THEN: 150 rail, 1.2 wide, 9 apart fits 15 with 6 left over
    let calc = harness.state().calculation();
    assert_eq!(calc.flat.count, 15);
    assert!((calc.flat.used_length - 144.0).abs() < 1e-9);
    assert!((calc.flat.remaining_length - 6.0).abs() < 1e-9);

    let screen = harness.render_to_string();
    assert!(screen.contains("Balusters that fit: 15"), "{screen}");
    assert!(screen.contains("Remaining: 6.00 cm"), "{screen}");
}

#[test]
fn typing_a_shorter_rail_recomputes_results() {
    // GIVEN: Rail Length focused
    let mut harness = AcceptanceTestHarness::new().expect("harness");

    // WHEN: User types 100 into it
    harness.enter_value("100");

    // THEN: floor((100 + 9) / 10.2) = 10 balusters over 93 units
    assert_eq!(harness.state().params().rail_length, 100.0);
    let screen = harness.render_to_string();
    assert!(screen.contains("Balusters that fit: 10"), "{screen}");
    assert!(screen.contains("Used length: 93.00 cm"), "{screen}");
    assert!(screen.contains("Remaining: 7.00 cm"), "{screen}");
}

#[test]
fn rail_shorter_than_one_baluster_fits_none() {
    // GIVEN: Width 10, spacing 0
    let mut harness = AcceptanceTestHarness::new().expect("harness");
    harness.send_key(KeyCode::Tab);
    harness.enter_value("10");
    harness.send_key(KeyCode::Tab);
    harness.enter_value("0");

    // WHEN: Rail is 5
    harness.send_key(KeyCode::Tab);
    harness.enter_value("5");

    // THEN: Nothing fits and the whole rail remains
    let calc = harness.state().calculation();
    assert_eq!(calc.flat.count, 0);
    assert_eq!(calc.flat.used_length, 0.0);
    assert_eq!(calc.flat.remaining_length, 5.0);
    assert!(calc.viewport.item_positions_px.is_empty());
}

#[test]
fn invalid_text_is_reported_and_ignored() {
    // GIVEN: Spacing focused
    let mut harness = AcceptanceTestHarness::new().expect("harness");
    harness.send_keys(&[KeyCode::Down, KeyCode::Down]);

    // WHEN: User commits something that is not a number
    harness.enter_value("1e");

    // THEN: Spacing unchanged, error shown, app still running
    assert_eq!(harness.state().params().spacing, 9.0);
    assert!(harness.is_running());
    let screen = harness.render_to_string();
    assert!(screen.contains("'1e' is not a number"), "{screen}");
}

#[test]
fn stepping_spacing_down_fits_more_balusters() {
    // GIVEN: Spacing focused (9.0)
    let mut harness = AcceptanceTestHarness::new().expect("harness");
    harness.send_keys(&[KeyCode::Tab, KeyCode::Tab]);

    // WHEN: Decrease twice by 0.5
    harness.send_keys(&[KeyCode::Char('-'), KeyCode::Char('-')]);

    // THEN: Spacing 8 fits floor((150 + 8) / 9.2) = 17
    assert_eq!(harness.state().params().spacing, 8.0);
    assert_eq!(harness.state().calculation().flat.count, 17);
}

#[test]
fn reset_restores_default_rail() {
    let mut harness = AcceptanceTestHarness::new().expect("harness");
    harness.enter_value("42");
    assert_eq!(harness.state().params().rail_length, 42.0);

    harness.send_key(KeyCode::Char('r'));

    assert_eq!(harness.state().params().rail_length, 150.0);
    assert_eq!(harness.state().calculation().flat.count, 15);
}

#[test]
fn huge_rail_is_rejected_without_stalling() {
    let mut harness = AcceptanceTestHarness::new().expect("harness");

    harness.enter_value("1e12");

    assert_eq!(harness.state().params().rail_length, 150.0);
    let screen = harness.render_to_string();
    assert!(screen.contains("limit 10000"), "{screen}");
}
