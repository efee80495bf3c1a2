//! Arena domain: stage setup and character spawning.

mod spawn;

use bevy::prelude::*;

use crate::arena::spawn::{spawn_characters, spawn_stage};

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_stage, spawn_characters));
    }
}
