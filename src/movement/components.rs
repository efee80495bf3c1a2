//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces; block movement without counting as support
    Wall,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Projectiles fired by the player
    PlayerProjectile,
    /// Projectiles fired by enemies
    EnemyProjectile,
}

#[derive(Component, Debug)]
pub struct Player;

/// Velocity dead zone inside which facing does not flip.
pub const FACING_DEAD_ZONE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Update from horizontal velocity; sticky inside the dead zone.
    pub fn update(&mut self, vx: f32) {
        if vx > FACING_DEAD_ZONE {
            *self = Facing::Right;
        } else if vx < -FACING_DEAD_ZONE {
            *self = Facing::Left;
        }
    }
}

/// Per-entity locomotion constants, fixed at spawn.
#[derive(Component, Debug, Clone)]
pub struct Mobility {
    pub run_speed: f32,
    pub jump_height: f32,
    /// Airborne jumps permitted before a fresh ground contact is required.
    pub max_extra_jumps: u8,
}

impl Mobility {
    pub fn jump_velocity(&self) -> f32 {
        self.run_speed * self.jump_height
    }
}

/// Outcome of one jump request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpVerdict {
    /// Grounded jump; buffer refilled, latch cleared.
    GroundLaunch,
    /// Airborne jump consuming one buffered jump.
    AirLaunch,
    /// Buffer exhausted; the request is latched and retried until landing.
    Deferred,
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    /// Airborne jumps still available. Refilled only by a grounded jump.
    pub jump_buffer: u8,
    /// Latched jump request from an exhausted-buffer tick.
    pub jump_again: bool,
}

impl MovementState {
    pub fn new(max_extra_jumps: u8) -> Self {
        Self {
            jump_buffer: max_extra_jumps,
            ..default()
        }
    }

    /// Evaluate one jump request against the current ground/buffer state.
    ///
    /// The grounded branch wins over the buffer even when both would allow a
    /// jump, so a grounded jump always refills the buffer.
    pub fn request_jump(&mut self, max_extra_jumps: u8) -> JumpVerdict {
        if self.on_ground {
            self.jump_buffer = max_extra_jumps;
            self.jump_again = false;
            JumpVerdict::GroundLaunch
        } else if self.jump_buffer > 0 {
            self.jump_buffer -= 1;
            JumpVerdict::AirLaunch
        } else {
            self.jump_again = true;
            JumpVerdict::Deferred
        }
    }
}
