//! Agent domain: the learned-policy provider component.

use bevy::prelude::*;

use crate::input::ControlVector;

/// Marks the entity driven by the learned policy and holds the control
/// vector applied since the last decision step. Between decisions the last
/// vector keeps being applied; a fresh episode starts neutral.
#[derive(Component, Debug, Default)]
pub struct PolicyDriver {
    control: ControlVector,
}

impl PolicyDriver {
    /// Consume one decision-step action into the held control vector.
    pub fn apply_action(&mut self, action: f32) -> ControlVector {
        self.control = ControlVector::from_policy_action(action);
        self.control
    }

    pub fn control(&self) -> ControlVector {
        self.control
    }
}
