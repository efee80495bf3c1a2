//! Movement domain: ground sensing, locomotion, and jump state.

mod components;
mod systems;


pub use components::{Facing, GameLayer, JumpVerdict, Mobility, MovementState, Player};
pub(crate) use systems::ground::{PROBE_MAX_DISTANCE, PROBE_ORIGIN_EPSILON, probe_extents};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::movement::systems::ground::probe_ground;
use crate::movement::systems::jump::apply_jump;
use crate::movement::systems::locomotion::{apply_locomotion, mirror_sprites};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, probe_ground.in_set(SimulationSet::Sense))
            .add_systems(
                FixedUpdate,
                (apply_locomotion, apply_jump, mirror_sprites)
                    .chain()
                    .in_set(SimulationSet::Act),
            );
    }
}
