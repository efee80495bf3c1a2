//! Movement domain: horizontal locomotion and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::Dormant;
use crate::input::ControlVector;
use crate::movement::{Facing, Mobility, MovementState};

pub(crate) fn apply_locomotion(
    mut query: Query<
        (
            &ControlVector,
            &Mobility,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        Without<Dormant>,
    >,
) {
    for (control, mobility, mut state, mut velocity) in &mut query {
        let axis = control.horizontal_axis();

        if axis != 0.0 {
            velocity.x = axis * mobility.run_speed;
        } else {
            velocity.x = 0.0;
        }

        state.facing.update(velocity.x);
    }
}

pub(crate) fn mirror_sprites(
    mut query: Query<(&MovementState, &mut Sprite), Without<Dormant>>,
) {
    for (state, mut sprite) in &mut query {
        sprite.flip_x = state.facing == Facing::Left;
    }
}
