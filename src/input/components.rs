//! Input domain: control vector and provider components.

use bevy::prelude::*;

/// Horizontal channel value that means "no movement".
pub const NEUTRAL_HORIZONTAL: f32 = 0.5;

/// The normalized per-tick input contract shared by every provider.
///
/// All three channels live in `[0, 1]`: horizontal encodes full-left at 0,
/// idle at 0.5 and full-right at 1; jump and attack are discrete signals
/// read through rounding. Out-of-range values are clamped at construction,
/// so every consumer sees a total input.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ControlVector {
    horizontal: f32,
    jump: f32,
    attack: f32,
}

impl Default for ControlVector {
    fn default() -> Self {
        Self::neutral()
    }
}

impl ControlVector {
    pub fn new(horizontal: f32, jump: f32, attack: f32) -> Self {
        Self {
            horizontal: horizontal.clamp(0.0, 1.0),
            jump: jump.clamp(0.0, 1.0),
            attack: attack.clamp(0.0, 1.0),
        }
    }

    /// Idle: centered horizontal, no jump, no attack.
    pub fn neutral() -> Self {
        Self::new(NEUTRAL_HORIZONTAL, 0.0, 0.0)
    }

    /// Build a vector from a raw device axis in `[-1, 1]`.
    pub fn from_device(axis: f32, jump: bool, attack: bool) -> Self {
        Self::new(
            (axis.clamp(-1.0, 1.0) + 1.0) / 2.0,
            if jump { 1.0 } else { 0.0 },
            if attack { 1.0 } else { 0.0 },
        )
    }

    /// Build a vector from one continuous policy action in `[-1, 1]`.
    ///
    /// The single action drives horizontal and jump identically; the policy
    /// never attacks.
    pub fn from_policy_action(action: f32) -> Self {
        let channel = (action.clamp(-1.0, 1.0) + 1.0) / 2.0;
        Self::new(channel, channel, 0.0)
    }

    /// Signed horizontal axis in `[-1, 1]`, recovered via `(h - 0.5) * 2`.
    pub fn horizontal_axis(&self) -> f32 {
        (self.horizontal - NEUTRAL_HORIZONTAL) * 2.0
    }

    pub fn jump_requested(&self) -> bool {
        self.jump.round() == 1.0
    }

    pub fn attack_requested(&self) -> bool {
        self.attack.round() == 1.0
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    pub fn jump(&self) -> f32 {
        self.jump
    }

    pub fn attack(&self) -> f32 {
        self.attack
    }

    /// The same vector with the horizontal channel flipped around 0.5.
    pub fn with_flipped_horizontal(&self) -> Self {
        Self {
            horizontal: 1.0 - self.horizontal,
            ..*self
        }
    }
}

/// Marks the entity whose control vector is written from the keyboard/mouse.
#[derive(Component, Debug)]
pub struct HumanControlled;

/// Timer-driven provider that walks back and forth, flipping its horizontal
/// channel around the midpoint on a fixed interval. Jump and attack channels
/// are fixed at spawn.
#[derive(Component, Debug, Clone)]
pub struct PatrolDriver {
    vector: ControlVector,
    flip_interval: f32,
    timer: f32,
}

impl PatrolDriver {
    pub fn new(initial: ControlVector, flip_interval: f32) -> Self {
        Self {
            vector: initial,
            flip_interval,
            timer: 0.0,
        }
    }

    /// Advance the patrol timer, flipping direction when the interval elapses.
    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer >= self.flip_interval {
            self.vector = self.vector.with_flipped_horizontal();
            self.timer = 0.0;
        }
    }

    pub fn control(&self) -> ControlVector {
        self.vector
    }
}
