//! Tuning domain: the static configuration surface.
//!
//! Every gameplay constant is fixed per entity at spawn. Defaults live in
//! code; an optional RON file overrides them. Configuration errors abort
//! startup rather than degrade silently.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{
    ArenaConfig, CharacterConfig, EnemyDriver, GameTuning, PatrolConfig, ValidationError,
};
pub use loader::TUNING_PATH;

use bevy::prelude::*;
use std::path::Path;

pub struct TuningPlugin;

impl Plugin for TuningPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match loader::load_tuning(Path::new(TUNING_PATH)) {
            Ok(Some(tuning)) => {
                info!("Loaded tuning overrides from {}", TUNING_PATH);
                tuning
            }
            Ok(None) => GameTuning::default(),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        };

        let errors = tuning.validate();
        if !errors.is_empty() {
            for error in &errors {
                error!("Invalid tuning: {}", error);
            }
            std::process::exit(1);
        }

        app.insert_resource(tuning);
    }
}
