//! Combat domain: the cooldown-gated attack trigger.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackCooldown, FirePoint, Projectile, ProjectilePool};
use crate::core::Dormant;
use crate::input::ControlVector;
use crate::movement::MovementState;

/// Attack-permission predicate. Always true for now; the extension point
/// for conditions like "idle and grounded".
fn can_attack(_state: &MovementState) -> bool {
    true
}

pub(crate) fn fire_attacks(
    mut commands: Commands,
    time: Res<Time>,
    mut shooters: Query<
        (
            &ControlVector,
            &MovementState,
            &Transform,
            &FirePoint,
            &ProjectilePool,
            &mut AttackCooldown,
        ),
        (Without<Dormant>, Without<Projectile>),
    >,
    mut slots: Query<(&mut Projectile, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    let dt = time.delta_secs();

    for (control, state, transform, fire_point, pool, mut cooldown) in &mut shooters {
        if control.attack_requested() && cooldown.ready() && can_attack(state) {
            cooldown.fire();

            let facing = state.facing.sign();
            let selected = pool.select_slot(|slot| {
                slots
                    .get(slot)
                    .is_ok_and(|(projectile, ..)| !projectile.in_flight())
            });

            if let Some(slot) = selected
                && let Ok((mut projectile, mut slot_transform, mut sprite, mut visibility)) =
                    slots.get_mut(slot)
            {
                let origin =
                    transform.translation.truncate() + fire_point.world_offset(facing);
                slot_transform.translation.x = origin.x;
                slot_transform.translation.y = origin.y;

                projectile.launch(facing);
                sprite.flip_x = facing < 0.0;
                *visibility = Visibility::Visible;
                commands.entity(slot).remove::<ColliderDisabled>();

                debug!("Fired projectile {:?} with direction {}", slot, facing);
            }
        }

        cooldown.advance(dt);
    }
}
