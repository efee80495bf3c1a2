mod agent;
mod arena;
mod combat;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod input;
mod movement;
mod tuning;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Quarrel".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        tuning::TuningPlugin,
        input::InputPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        agent::AgentPlugin,
        arena::ArenaPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
