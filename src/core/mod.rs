//! Core domain: simulation scheduling, seeded randomness, and camera setup.

mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{RunSeed, SimulationRng};

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Ordering of gameplay work within one fixed simulation tick.
///
/// Sense samples ground contact, Poll lets each input provider write its
/// control vector, Act mutates velocity from that vector, Attack evaluates
/// the cooldown gate, Contact drains collision messages into hit flags, and
/// Resolve consumes those flags (projectile lifetime, health, episode end).
/// Physics integration runs between ticks; Contact always sees the most
/// recently completed physics step.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Sense,
    Poll,
    Act,
    Attack,
    Contact,
    Resolve,
}

/// Marker for a gameplay entity that has been deactivated.
///
/// Deactivation is the sole destroy signal: dead characters and spent
/// projectile slots are parked under this marker and reused, never despawned.
#[derive(Component, Debug)]
pub struct Dormant;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunSeed>()
            .init_resource::<SimulationRng>()
            .add_systems(Startup, setup_camera)
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Sense,
                    SimulationSet::Poll,
                    SimulationSet::Act,
                    SimulationSet::Attack,
                    SimulationSet::Contact,
                    SimulationSet::Resolve,
                )
                    .chain(),
            );
    }
}
