//! Combat domain: ranged attacks, projectile pools, and health.

mod components;
mod events;
mod spawn;
mod systems;


pub use components::{
    AttackCooldown, FirePoint, FlightTick, Health, HealthTick, MAX_FLIGHT_SECONDS, Projectile,
    ProjectilePool, Team,
};
pub use events::DeathEvent;
pub use spawn::spawn_projectile_pool;
pub(crate) use systems::health::resolve_health;

use bevy::prelude::*;

use crate::combat::systems::attack::fire_attacks;
use crate::combat::systems::projectile::{advance_projectiles, route_projectile_contacts};
use crate::core::SimulationSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DeathEvent>()
            .add_systems(FixedUpdate, fire_attacks.in_set(SimulationSet::Attack))
            .add_systems(
                FixedUpdate,
                route_projectile_contacts.in_set(SimulationSet::Contact),
            )
            .add_systems(
                FixedUpdate,
                (advance_projectiles, resolve_health)
                    .chain()
                    .in_set(SimulationSet::Resolve),
            );
    }
}
