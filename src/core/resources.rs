//! Core domain: run seed and the simulation RNG derived from it.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for everything random in a run (currently: episode respawn points).
#[derive(Resource, Debug, Clone, Copy)]
pub struct RunSeed(pub u64);

impl Default for RunSeed {
    fn default() -> Self {
        Self(rand::rng().random())
    }
}

/// Deterministic RNG for gameplay decisions, seeded from [`RunSeed`].
#[derive(Resource, Debug)]
pub struct SimulationRng(pub ChaCha8Rng);

impl SimulationRng {
    pub fn from_seed(seed: &RunSeed) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed.0))
    }
}

impl FromWorld for SimulationRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world.get_resource_or_insert_with(RunSeed::default);
        Self::from_seed(&seed)
    }
}
