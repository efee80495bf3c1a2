//! Agent domain: episode lifecycle and policy-action application.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::agent::{EpisodeOutcome, PolicyDriver, TrainingBridge};
use crate::combat::{DeathEvent, Health};
use crate::core::{Dormant, SimulationRng};
use crate::input::ControlVector;
use crate::movement::Player;
use crate::tuning::GameTuning;

/// A policy agent with no opponent cannot produce its fixed-shape
/// observation; refuse to run rather than degrade.
pub(crate) fn validate_agent_setup(
    agents: Query<(), With<PolicyDriver>>,
    opponents: Query<(), (With<Player>, Without<PolicyDriver>)>,
) {
    if !agents.is_empty() && opponents.is_empty() {
        error!("Learned-policy agent requires an opponent; none was spawned");
        std::process::exit(1);
    }
}

/// Start a fresh episode when the trainer asked for one: reactivate the
/// agent at a uniform-random point inside the arena with restored hit
/// points and neutral control.
pub(crate) fn begin_episode(
    mut commands: Commands,
    mut bridge: ResMut<TrainingBridge>,
    mut rng: ResMut<SimulationRng>,
    tuning: Res<GameTuning>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &mut Health,
            &mut LinearVelocity,
            &mut PolicyDriver,
            &mut ControlVector,
            &mut Visibility,
        ),
    >,
) {
    if !bridge.take_reset_request() {
        return;
    }

    let (half_x, half_y) = tuning.arena.half_extents;

    for (entity, mut transform, mut health, mut velocity, mut driver, mut control, mut visibility) in
        &mut query
    {
        let x = rng.0.random_range(-half_x..half_x);
        let y = rng.0.random_range(-half_y..half_y);
        transform.translation.x = x;
        transform.translation.y = y;

        health.restore();
        velocity.x = 0.0;
        velocity.y = 0.0;
        *driver = PolicyDriver::default();
        *control = ControlVector::neutral();
        *visibility = Visibility::Visible;
        commands
            .entity(entity)
            .remove::<(Dormant, ColliderDisabled, RigidBodyDisabled)>();

        debug!("Episode begins: agent {:?} respawned at ({:.1}, {:.1})", entity, x, y);
    }

    bridge.clear_episode();
}

/// Consume at most one queued action per tick; the held vector keeps
/// applying between decision steps.
pub(crate) fn apply_policy_action(
    mut bridge: ResMut<TrainingBridge>,
    mut query: Query<(&mut PolicyDriver, &mut ControlVector), Without<Dormant>>,
) {
    let action = bridge.take_action();

    for (mut driver, mut control) in &mut query {
        if let Some(action) = action {
            driver.apply_action(action);
        }
        *control = driver.control();
    }
}

/// Record {own position, opponent position} for the trainer.
pub(crate) fn collect_observation(
    mut bridge: ResMut<TrainingBridge>,
    agents: Query<&Transform, With<PolicyDriver>>,
    opponents: Query<&Transform, (With<Player>, Without<PolicyDriver>)>,
) {
    let Ok(agent) = agents.single() else {
        return;
    };
    let Ok(opponent) = opponents.single() else {
        error!("Learned-policy agent has no opponent to observe");
        return;
    };

    bridge.record_observation([
        agent.translation.x,
        agent.translation.y,
        opponent.translation.x,
        opponent.translation.y,
    ]);
}

/// Touching the opponent is the goal: terminal reward +1.
pub(crate) fn detect_opponent_contact(
    mut bridge: ResMut<TrainingBridge>,
    mut collision_events: MessageReader<CollisionStart>,
    agents: Query<(), (With<PolicyDriver>, Without<Dormant>)>,
    opponents: Query<(), (With<Player>, Without<PolicyDriver>)>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (agent, opponent) in pairs {
            if agents.contains(agent) && opponents.contains(opponent) {
                bridge.record_outcome(EpisodeOutcome::reached_opponent());
                info!("Episode ends: agent reached its opponent");
            }
        }
    }
}

/// Dying ends the episode with the default (zero) reward.
pub(crate) fn close_episode_on_death(
    mut bridge: ResMut<TrainingBridge>,
    mut deaths: MessageReader<DeathEvent>,
    agents: Query<(), With<PolicyDriver>>,
) {
    for death in deaths.read() {
        if agents.contains(death.entity) {
            bridge.record_outcome(EpisodeOutcome::died());
            info!("Episode ends: agent died");
        }
    }
}
