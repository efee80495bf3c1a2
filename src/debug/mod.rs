//! Debug domain: diagnostic gizmo overlays. Visual only, no gameplay effect.

mod systems;

use bevy::prelude::*;

use crate::debug::systems::draw_ground_probes;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_ground_probes);
    }
}
