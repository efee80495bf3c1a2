//! Combat domain: projectile pool construction.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Projectile, ProjectilePool, Team};
use crate::tuning::CharacterConfig;

const PROJECTILE_RADIUS: f32 = 0.15;

fn projectile_color(team: Team) -> Color {
    match team {
        Team::Player => Color::srgb(0.95, 0.85, 0.3),
        Team::Enemy => Color::srgb(0.9, 0.35, 0.25),
    }
}

/// Pre-spawn a fixed-capacity pool of parked projectile slots for one
/// shooter. Slots are sensor colliders translated manually in flight; they
/// start hidden with their collision volume disabled.
pub fn spawn_projectile_pool(
    commands: &mut Commands,
    team: Team,
    config: &CharacterConfig,
) -> ProjectilePool {
    let slots = (0..config.pool_capacity)
        .map(|_| {
            commands
                .spawn((
                    Projectile::new(config.projectile_speed),
                    Sprite {
                        color: projectile_color(team),
                        custom_size: Some(Vec2::splat(PROJECTILE_RADIUS * 2.0)),
                        ..default()
                    },
                    Transform::from_xyz(0.0, 0.0, 1.0),
                    Visibility::Hidden,
                    Collider::circle(PROJECTILE_RADIUS),
                    Sensor,
                    CollisionEventsEnabled,
                    CollisionLayers::new(team.projectile_layer(), team.projectile_targets()),
                    ColliderDisabled,
                ))
                .id()
        })
        .collect();

    ProjectilePool::new(slots)
}
