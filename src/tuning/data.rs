//! Tuning domain: static per-entity configuration and its validation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which provider drives the enemy's control vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum EnemyDriver {
    /// Timer-based patrol with fixed jump/attack channels.
    #[default]
    Patrol,
    /// External learned policy through the training bridge.
    Policy,
}

/// Per-entity gameplay constants, fixed at spawn.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterConfig {
    pub run_speed: f32,
    pub jump_height: f32,
    pub max_extra_jumps: u8,
    pub attack_cooldown: f32,
    pub max_hp: i32,
    pub projectile_speed: f32,
    pub pool_capacity: usize,
    /// Offset from the body center to the projectile spawn point; the x
    /// component mirrors with facing.
    pub fire_offset: (f32, f32),
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            run_speed: 10.0,
            jump_height: 5.0,
            max_extra_jumps: 1,
            attack_cooldown: 0.5,
            max_hp: 5,
            projectile_speed: 12.0,
            pool_capacity: 4,
            fire_offset: (0.7, 0.2),
        }
    }
}

impl CharacterConfig {
    pub fn fire_point(&self) -> Vec2 {
        Vec2::new(self.fire_offset.0, self.fire_offset.1)
    }

    fn validate(&self, section: &'static str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut check = |ok: bool, field: &'static str, message: &str| {
            if !ok {
                errors.push(ValidationError {
                    section,
                    field,
                    message: message.to_string(),
                });
            }
        };

        check(self.run_speed > 0.0, "run_speed", "must be positive");
        check(self.jump_height > 0.0, "jump_height", "must be positive");
        check(
            self.attack_cooldown >= 0.0,
            "attack_cooldown",
            "must not be negative",
        );
        check(self.max_hp > 0, "max_hp", "must be positive");
        check(
            self.projectile_speed > 0.0,
            "projectile_speed",
            "must be positive",
        );
        check(
            self.pool_capacity > 0,
            "pool_capacity",
            "a zero-capacity pool cannot fire",
        );
        errors
    }
}

/// Constants for the scripted patrol provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatrolConfig {
    /// Simulated seconds between direction flips.
    pub flip_interval: f32,
    /// Spawn-time channels; horizontal flips around 0.5 on the interval.
    pub horizontal: f32,
    pub jump: f32,
    pub attack: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            flip_interval: 7.0,
            horizontal: 0.75,
            jump: 1.0,
            attack: 1.0,
        }
    }
}

impl PatrolConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.flip_interval <= 0.0 {
            errors.push(ValidationError {
                section: "patrol",
                field: "flip_interval",
                message: "must be positive".to_string(),
            });
        }
        for (value, field) in [
            (self.horizontal, "horizontal"),
            (self.jump, "jump"),
            (self.attack, "attack"),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(ValidationError {
                    section: "patrol",
                    field,
                    message: "channels are normalized to [0, 1]".to_string(),
                });
            }
        }
        errors
    }
}

/// Stage extents and spawn points.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ArenaConfig {
    /// Half extents of the episode respawn region.
    pub half_extents: (f32, f32),
    pub player_spawn: (f32, f32),
    pub enemy_spawn: (f32, f32),
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_extents: (16.0, 8.0),
            player_spawn: (-6.0, -4.0),
            enemy_spawn: (6.0, -4.0),
        }
    }
}

impl ArenaConfig {
    pub fn player_spawn_point(&self) -> Vec2 {
        Vec2::new(self.player_spawn.0, self.player_spawn.1)
    }

    pub fn enemy_spawn_point(&self) -> Vec2 {
        Vec2::new(self.enemy_spawn.0, self.enemy_spawn.1)
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.half_extents.0 <= 0.0 || self.half_extents.1 <= 0.0 {
            errors.push(ValidationError {
                section: "arena",
                field: "half_extents",
                message: "must be positive".to_string(),
            });
        }
        errors
    }
}

/// The whole static tuning surface, optionally overridden from RON.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameTuning {
    pub player: CharacterConfig,
    pub enemy: CharacterConfig,
    pub patrol: PatrolConfig,
    pub arena: ArenaConfig,
    pub enemy_driver: EnemyDriver,
}

impl GameTuning {
    /// Collect every configuration error; empty means the tuning is usable.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        errors.extend(self.player.validate("player"));
        errors.extend(self.enemy.validate("enemy"));
        errors.extend(self.patrol.validate());
        errors.extend(self.arena.validate());
        errors
    }
}

/// A configuration error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}
