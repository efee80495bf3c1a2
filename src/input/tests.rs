//! Input domain: tests for the control-vector contract and providers.

use super::{ControlVector, PatrolDriver};

const EPSILON: f32 = 1e-6;

// -----------------------------------------------------------------------------
// ControlVector tests
// -----------------------------------------------------------------------------

#[test]
fn test_channels_clamp_to_unit_range() {
    let control = ControlVector::new(2.0, -1.0, 7.5);
    assert_eq!(control.horizontal(), 1.0);
    assert_eq!(control.jump(), 0.0);
    assert_eq!(control.attack(), 1.0);
}

#[test]
fn test_horizontal_axis_transform() {
    assert!((ControlVector::new(0.0, 0.0, 0.0).horizontal_axis() + 1.0).abs() < EPSILON);
    assert!(ControlVector::new(0.5, 0.0, 0.0).horizontal_axis().abs() < EPSILON);
    assert!((ControlVector::new(1.0, 0.0, 0.0).horizontal_axis() - 1.0).abs() < EPSILON);
}

#[test]
fn test_neutral_is_idle() {
    let control = ControlVector::neutral();
    assert!(control.horizontal_axis().abs() < EPSILON);
    assert!(!control.jump_requested());
    assert!(!control.attack_requested());
}

#[test]
fn test_discrete_channels_round() {
    assert!(!ControlVector::new(0.5, 0.49, 0.49).jump_requested());
    assert!(ControlVector::new(0.5, 0.51, 0.0).jump_requested());
    assert!(ControlVector::new(0.5, 0.0, 0.51).attack_requested());
}

#[test]
fn test_device_axis_maps_to_unit_interval() {
    assert!((ControlVector::from_device(-1.0, false, false).horizontal() - 0.0).abs() < EPSILON);
    assert!((ControlVector::from_device(0.0, false, false).horizontal() - 0.5).abs() < EPSILON);
    assert!((ControlVector::from_device(1.0, false, false).horizontal() - 1.0).abs() < EPSILON);

    let control = ControlVector::from_device(0.0, true, true);
    assert!(control.jump_requested());
    assert!(control.attack_requested());
}

#[test]
fn test_policy_action_drives_horizontal_and_jump_identically() {
    // Full-right action saturates both channels; attack stays off.
    let control = ControlVector::from_policy_action(1.0);
    assert_eq!(control.horizontal(), 1.0);
    assert_eq!(control.jump(), 1.0);
    assert_eq!(control.attack(), 0.0);

    let control = ControlVector::from_policy_action(-1.0);
    assert_eq!(control.horizontal(), 0.0);
    assert_eq!(control.jump(), 0.0);
    assert_eq!(control.attack(), 0.0);
}

#[test]
fn test_policy_action_clamps() {
    let control = ControlVector::from_policy_action(3.0);
    assert_eq!(control.horizontal(), 1.0);
}

#[test]
fn test_flip_is_an_involution() {
    let control = ControlVector::new(0.75, 1.0, 1.0);
    let flipped = control.with_flipped_horizontal();
    assert!((flipped.horizontal() - 0.25).abs() < EPSILON);
    assert_eq!(flipped.jump(), 1.0);
    assert_eq!(flipped.attack(), 1.0);

    let back = flipped.with_flipped_horizontal();
    assert!((back.horizontal() - 0.75).abs() < EPSILON);
}

// -----------------------------------------------------------------------------
// PatrolDriver tests
// -----------------------------------------------------------------------------

#[test]
fn test_patrol_flips_after_interval() {
    let mut driver = PatrolDriver::new(ControlVector::new(0.75, 1.0, 1.0), 7.0);

    for _ in 0..6 {
        driver.advance(1.0);
    }
    assert!((driver.control().horizontal() - 0.75).abs() < EPSILON);

    driver.advance(1.0);
    assert!((driver.control().horizontal() - 0.25).abs() < EPSILON);
}

#[test]
fn test_patrol_timer_resets_on_flip() {
    let mut driver = PatrolDriver::new(ControlVector::new(0.75, 1.0, 1.0), 7.0);

    for _ in 0..7 {
        driver.advance(1.0);
    }
    assert!((driver.control().horizontal() - 0.25).abs() < EPSILON);

    // A fresh interval must elapse before the next flip.
    for _ in 0..6 {
        driver.advance(1.0);
    }
    assert!((driver.control().horizontal() - 0.25).abs() < EPSILON);
    driver.advance(1.0);
    assert!((driver.control().horizontal() - 0.75).abs() < EPSILON);
}

#[test]
fn test_patrol_keeps_discrete_channels() {
    let mut driver = PatrolDriver::new(ControlVector::new(0.75, 1.0, 1.0), 7.0);
    driver.advance(7.0);

    let control = driver.control();
    assert!(control.jump_requested());
    assert!(control.attack_requested());
}
