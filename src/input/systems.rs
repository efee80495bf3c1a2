//! Input domain: provider systems that write control vectors each tick.

use bevy::prelude::*;

use crate::core::Dormant;
use crate::input::{ControlVector, HumanControlled, PatrolDriver};

pub(crate) fn read_human_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut query: Query<&mut ControlVector, (With<HumanControlled>, Without<Dormant>)>,
) {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    let jump = keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    let attack = mouse.just_pressed(MouseButton::Left);

    for mut control in &mut query {
        *control = ControlVector::from_device(axis, jump, attack);
    }
}

pub(crate) fn drive_patrol(
    time: Res<Time>,
    mut query: Query<(&mut PatrolDriver, &mut ControlVector), Without<Dormant>>,
) {
    let dt = time.delta_secs();

    for (mut driver, mut control) in &mut query {
        driver.advance(dt);
        *control = driver.control();
    }
}
