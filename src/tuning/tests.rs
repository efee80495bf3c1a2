//! Tuning domain: tests for defaults, validation, and the RON surface.

use super::data::GameTuning;
use super::loader::parse_tuning;
use super::{CharacterConfig, EnemyDriver};

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_defaults_validate() {
    assert!(GameTuning::default().validate().is_empty());
}

#[test]
fn test_zero_pool_capacity_is_rejected() {
    let mut tuning = GameTuning::default();
    tuning.player.pool_capacity = 0;

    let errors = tuning.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "pool_capacity");
    assert_eq!(errors[0].section, "player");
}

#[test]
fn test_non_positive_hp_is_rejected() {
    let mut tuning = GameTuning::default();
    tuning.enemy.max_hp = 0;

    let errors = tuning.validate();
    assert!(errors.iter().any(|e| e.field == "max_hp" && e.section == "enemy"));
}

#[test]
fn test_non_positive_speeds_are_rejected() {
    let mut tuning = GameTuning::default();
    tuning.player.run_speed = 0.0;
    tuning.enemy.projectile_speed = -1.0;

    let errors = tuning.validate();
    assert!(errors.iter().any(|e| e.field == "run_speed"));
    assert!(errors.iter().any(|e| e.field == "projectile_speed"));
}

#[test]
fn test_out_of_range_patrol_channels_are_rejected() {
    let mut tuning = GameTuning::default();
    tuning.patrol.horizontal = 1.5;

    let errors = tuning.validate();
    assert!(errors.iter().any(|e| e.section == "patrol" && e.field == "horizontal"));
}

#[test]
fn test_validation_errors_render_with_context() {
    let mut tuning = GameTuning::default();
    tuning.player.pool_capacity = 0;

    let rendered = tuning.validate()[0].to_string();
    assert!(rendered.contains("player.pool_capacity"));
}

// -----------------------------------------------------------------------------
// RON surface tests
// -----------------------------------------------------------------------------

#[test]
fn test_partial_override_keeps_defaults_elsewhere() {
    let tuning = parse_tuning(
        r#"(
            enemy_driver: Policy,
            enemy: (
                run_speed: 8.0,
                jump_height: 5.0,
                max_extra_jumps: 2,
                attack_cooldown: 1.0,
                max_hp: 3,
                projectile_speed: 12.0,
                pool_capacity: 4,
                fire_offset: (0.7, 0.2),
            ),
        )"#,
    )
    .expect("override should parse");

    assert_eq!(tuning.enemy_driver, EnemyDriver::Policy);
    assert_eq!(tuning.enemy.max_hp, 3);
    assert_eq!(tuning.enemy.max_extra_jumps, 2);
    // Untouched sections keep their defaults.
    let defaults = CharacterConfig::default();
    assert_eq!(tuning.player.max_hp, defaults.max_hp);
    assert_eq!(tuning.patrol.flip_interval, 7.0);
}

#[test]
fn test_malformed_override_is_an_error() {
    assert!(parse_tuning("(enemy_driver: Nonsense)").is_err());
}
