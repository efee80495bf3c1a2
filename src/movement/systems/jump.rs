//! Movement domain: jump requests against the buffer/latch state machine.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::Dormant;
use crate::input::ControlVector;
use crate::movement::{JumpVerdict, Mobility, MovementState};

pub(crate) fn apply_jump(
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
        if !control.jump_requested() && !state.jump_again {
            continue;
        }

        match state.request_jump(mobility.max_extra_jumps) {
            JumpVerdict::GroundLaunch => {
                velocity.y = mobility.jump_velocity();
                debug!("Ground jump: buffer refilled to {}", state.jump_buffer);
            }
            JumpVerdict::AirLaunch => {
                velocity.y = mobility.jump_velocity();
                debug!("Air jump: jump_buffer now {}", state.jump_buffer);
            }
            JumpVerdict::Deferred => {
                debug!("Jump deferred until landing");
            }
        }
    }
}
