//! Agent domain: the learned-policy input provider and training boundary.
//!
//! The external training loop owns episode pacing: it requests resets,
//! reads observations, submits one continuous action per decision step, and
//! consumes terminal outcomes through [`TrainingBridge`]. The simulation
//! maps each action onto the same control vector every other provider emits.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::PolicyDriver;
pub use resources::{EpisodeEnd, EpisodeOutcome, TrainingBridge};

use bevy::prelude::*;

use crate::agent::systems::{
    apply_policy_action, begin_episode, close_episode_on_death, collect_observation,
    detect_opponent_contact, validate_agent_setup,
};
use crate::core::SimulationSet;

pub struct AgentPlugin;

impl Plugin for AgentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrainingBridge>()
            .add_systems(PostStartup, validate_agent_setup)
            .add_systems(
                FixedUpdate,
                (begin_episode, apply_policy_action)
                    .chain()
                    .in_set(SimulationSet::Poll),
            )
            .add_systems(
                FixedUpdate,
                detect_opponent_contact.in_set(SimulationSet::Contact),
            )
            .add_systems(
                FixedUpdate,
                (close_episode_on_death, collect_observation)
                    .chain()
                    .in_set(SimulationSet::Resolve)
                    .after(crate::combat::resolve_health),
            );
    }
}
