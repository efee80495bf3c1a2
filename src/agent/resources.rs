//! Agent domain: the training boundary resource.

use bevy::prelude::*;

use crate::input::ControlVector;

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeEnd {
    /// The agent touched its opponent.
    ReachedOpponent,
    /// The agent's hit points were depleted.
    Died,
}

/// Terminal signal of one episode with its scalar reward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeOutcome {
    pub reward: f32,
    pub end: EpisodeEnd,
}

impl EpisodeOutcome {
    pub(crate) fn reached_opponent() -> Self {
        Self {
            reward: 1.0,
            end: EpisodeEnd::ReachedOpponent,
        }
    }

    pub(crate) fn died() -> Self {
        Self {
            reward: 0.0,
            end: EpisodeEnd::Died,
        }
    }
}

/// The boundary an external training loop drives the policy agent through.
///
/// The trainer calls [`request_reset`](Self::request_reset) to start an
/// episode, reads [`observation`](Self::observation), submits one action per
/// decision step, and consumes the terminal outcome when one appears. The
/// simulation never restarts an episode on its own.
#[derive(Resource, Debug, Default)]
pub struct TrainingBridge {
    pending_action: Option<f32>,
    observation: Option<[f32; 4]>,
    reset_requested: bool,
    outcome: Option<EpisodeOutcome>,
}

impl TrainingBridge {
    /// Ask for a fresh episode on the next tick: random respawn, restored
    /// hit points, neutral control.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    /// Queue one action for the next decision tick and return the input
    /// vector it maps to. A second submission before the tick replaces the
    /// first.
    pub fn submit_action(&mut self, action: f32) -> ControlVector {
        let action = action.clamp(-1.0, 1.0);
        self.pending_action = Some(action);
        ControlVector::from_policy_action(action)
    }

    /// Latest observation: own position then opponent position.
    pub fn observation(&self) -> Option<[f32; 4]> {
        self.observation
    }

    /// Consume the episode's terminal signal, if one has occurred.
    pub fn take_outcome(&mut self) -> Option<EpisodeOutcome> {
        self.outcome.take()
    }

    pub(crate) fn take_reset_request(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }

    pub(crate) fn take_action(&mut self) -> Option<f32> {
        self.pending_action.take()
    }

    pub(crate) fn record_observation(&mut self, observation: [f32; 4]) {
        self.observation = Some(observation);
    }

    /// The first terminal of an episode wins; later ones are ignored until
    /// the next reset.
    pub(crate) fn record_outcome(&mut self, outcome: EpisodeOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }

    pub(crate) fn clear_episode(&mut self) {
        self.pending_action = None;
        self.outcome = None;
    }
}
