//! Movement domain: ground detection via a downward shape cast.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::Dormant;
use crate::movement::{GameLayer, MovementState};

/// Downward shift of the cast origin from the body center.
pub(crate) const PROBE_ORIGIN_EPSILON: f32 = 0.05;
/// Maximum cast distance below the origin.
pub(crate) const PROBE_MAX_DISTANCE: f32 = 0.1;
/// Probe box size relative to the body size.
const PROBE_SIZE_FACTOR: f32 = 1.5;
/// Amount trimmed from the scaled probe height.
const PROBE_HEIGHT_TRIM: f32 = 0.5;

/// Size of the cast box for a body with the given half extents: the body
/// size scaled by 1.5, with a fixed trim off the height. The probe must
/// overhang the feet so a supporting surface registers as an immediate
/// overlap within the short cast distance.
pub(crate) fn probe_extents(body_half_extents: Vec2) -> Vec2 {
    Vec2::new(
        body_half_extents.x * 2.0 * PROBE_SIZE_FACTOR,
        (body_half_extents.y * 2.0 * PROBE_SIZE_FACTOR - PROBE_HEIGHT_TRIM)
            .max(PROBE_ORIGIN_EPSILON),
    )
}

pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MovementState), Without<Dormant>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let body_half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(0.5, 1.0),
        };

        let size = probe_extents(body_half_extents);
        let origin = transform.translation.truncate() - Vec2::new(0.0, PROBE_ORIGIN_EPSILON);
        let probe = Collider::rectangle(size.x, size.y);

        let hit = spatial_query.cast_shape(
            &probe,
            origin,
            0.0,
            Dir2::NEG_Y,
            &ShapeCastConfig::from_max_distance(PROBE_MAX_DISTANCE),
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            debug!("Landed: jump_buffer={}", state.jump_buffer);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: jump_buffer={}", state.jump_buffer);
        }
    }
}
