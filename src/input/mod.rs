//! Input domain: the normalized control-vector contract and its providers.
//!
//! Keyboard, scripted patrol, and learned policy all drive a character the
//! same way: by producing one three-channel [`ControlVector`] per tick.
//! Normalization happens in the provider, never in the consumer.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ControlVector, HumanControlled, PatrolDriver};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::input::systems::{drive_patrol, read_human_input};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (read_human_input, drive_patrol).in_set(SimulationSet::Poll),
        );
    }
}
