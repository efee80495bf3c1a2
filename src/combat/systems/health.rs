//! Combat domain: per-tick health resolution and death handling.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{DeathEvent, Health, HealthTick};
use crate::core::Dormant;

/// Consume pending-hit flags set by this tick's contact routing. An entity
/// deactivates the tick its hit points first reach zero; it is parked, not
/// despawned.
pub(crate) fn resolve_health(
    mut commands: Commands,
    mut deaths: MessageWriter<DeathEvent>,
    mut query: Query<(Entity, &mut Health, &mut Visibility), Without<Dormant>>,
) {
    for (entity, mut health, mut visibility) in &mut query {
        match health.resolve() {
            HealthTick::Unharmed => {}
            HealthTick::Damaged => {
                debug!("Entity {:?} hit, hp now {}", entity, health.current());
            }
            HealthTick::Depleted => {
                *visibility = Visibility::Hidden;
                commands
                    .entity(entity)
                    .insert((Dormant, ColliderDisabled, RigidBodyDisabled));
                deaths.write(DeathEvent { entity });
                info!("Entity {:?} died", entity);
            }
        }
    }
}
