//! Combat domain: projectile contact routing and flight updates.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{FlightTick, Health, Projectile};
use crate::core::Dormant;

/// Drain collision messages into hit flags. The first contact of a flight
/// marks the projectile and disables its collision volume; if the other
/// party tracks health, a pending hit is flagged for its next resolve tick.
/// Repeat contacts and contacts on parked slots are no-ops.
pub(crate) fn route_projectile_contacts(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut projectiles: Query<&mut Projectile>,
    mut victims: Query<&mut Health, Without<Dormant>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (projectile_entity, other) in pairs {
            let Ok(mut projectile) = projectiles.get_mut(projectile_entity) else {
                continue;
            };

            if !projectile.mark_hit() {
                continue;
            }
            commands.entity(projectile_entity).insert(ColliderDisabled);

            if let Ok(mut health) = victims.get_mut(other) {
                health.register_hit();
            }
        }
    }
}

pub(crate) fn advance_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Projectile, &mut Transform, &mut Visibility)>,
) {
    let dt = time.delta_secs();

    for (entity, mut projectile, mut transform, mut visibility) in &mut query {
        match projectile.advance(dt) {
            FlightTick::Dormant => {}
            FlightTick::Impact => {
                park(&mut commands, entity, &mut visibility);
            }
            FlightTick::Step { dx, expired } => {
                transform.translation.x += dx;
                if expired {
                    park(&mut commands, entity, &mut visibility);
                }
            }
        }
    }
}

fn park(commands: &mut Commands, entity: Entity, visibility: &mut Visibility) {
    *visibility = Visibility::Hidden;
    commands.entity(entity).insert(ColliderDisabled);
}
