//! Debug domain: ground-probe cast visualization.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::Dormant;
use crate::movement::{MovementState, PROBE_MAX_DISTANCE, PROBE_ORIGIN_EPSILON, probe_extents};

/// Draw each character's ground-probe box and its swept copy: red while the
/// cast reports a hit, green otherwise.
pub(crate) fn draw_ground_probes(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &Collider, &MovementState), Without<Dormant>>,
) {
    for (transform, collider, state) in &query {
        let body_half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(0.5, 1.0),
        };

        let size = probe_extents(body_half_extents);
        let origin = transform.translation.truncate() - Vec2::new(0.0, PROBE_ORIGIN_EPSILON);
        let swept = origin - Vec2::new(0.0, PROBE_MAX_DISTANCE);

        let color = if state.on_ground {
            Color::srgb(0.9, 0.2, 0.2)
        } else {
            Color::srgb(0.2, 0.9, 0.2)
        };

        gizmos.rect_2d(Isometry2d::from_translation(origin), size, color);
        gizmos.rect_2d(Isometry2d::from_translation(swept), size, color);
        gizmos.line_2d(origin, swept, Color::srgb(0.6, 0.6, 0.6));
    }
}
