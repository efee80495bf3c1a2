//! Arena domain: stage geometry and character assembly.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::agent::PolicyDriver;
use crate::combat::{AttackCooldown, FirePoint, Health, Team, spawn_projectile_pool};
use crate::input::{ControlVector, HumanControlled, PatrolDriver};
use crate::movement::{GameLayer, Mobility, MovementState, Player};
use crate::tuning::{CharacterConfig, EnemyDriver, GameTuning};

const CHARACTER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

fn character_color(team: Team) -> Color {
    match team {
        Team::Player => Color::srgb(0.85, 0.85, 0.9),
        Team::Enemy => Color::srgb(0.8, 0.3, 0.3),
    }
}

/// Everything a character needs, chosen explicitly at spawn. The input
/// provider is selected by inserting its marker alongside this bundle.
#[derive(Bundle)]
pub struct CharacterBundle {
    team: Team,
    control: ControlVector,
    mobility: Mobility,
    movement: MovementState,
    health: Health,
    cooldown: AttackCooldown,
    fire_point: FirePoint,
    sprite: Sprite,
    transform: Transform,
    rigid_body: RigidBody,
    collider: Collider,
    collision_events: CollisionEventsEnabled,
    collision_layers: CollisionLayers,
    velocity: LinearVelocity,
    locked_axes: LockedAxes,
}

impl CharacterBundle {
    pub fn new(team: Team, config: &CharacterConfig, position: Vec2) -> Self {
        Self {
            team,
            control: ControlVector::neutral(),
            mobility: Mobility {
                run_speed: config.run_speed,
                jump_height: config.jump_height,
                max_extra_jumps: config.max_extra_jumps,
            },
            movement: MovementState::new(config.max_extra_jumps),
            health: Health::new(config.max_hp),
            cooldown: AttackCooldown::new(config.attack_cooldown),
            fire_point: FirePoint(config.fire_point()),
            sprite: Sprite {
                color: character_color(team),
                custom_size: Some(CHARACTER_SIZE),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(CHARACTER_SIZE.x, CHARACTER_SIZE.y),
            collision_events: CollisionEventsEnabled,
            collision_layers: CollisionLayers::new(
                team.character_layer(),
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    team.opponent().character_layer(),
                    team.opponent().projectile_layer(),
                ],
            ),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
        }
    }
}

fn spawn_slab(commands: &mut Commands, layer: GameLayer, position: Vec2, size: Vec2) {
    commands.spawn((
        Sprite {
            color: Color::srgb(0.35, 0.4, 0.45),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, LayerMask::ALL),
    ));
}

pub(crate) fn spawn_stage(mut commands: Commands, tuning: Res<GameTuning>) {
    let (half_x, half_y) = tuning.arena.half_extents;

    // Floor and platforms live on the Ground layer the probe casts against;
    // the bounding side walls block movement without counting as support.
    spawn_slab(
        &mut commands,
        GameLayer::Ground,
        Vec2::new(0.0, -half_y - 0.5),
        Vec2::new(half_x * 2.0 + 2.0, 1.0),
    );
    spawn_slab(
        &mut commands,
        GameLayer::Wall,
        Vec2::new(-half_x - 0.5, 0.0),
        Vec2::new(1.0, half_y * 2.0 + 2.0),
    );
    spawn_slab(
        &mut commands,
        GameLayer::Wall,
        Vec2::new(half_x + 0.5, 0.0),
        Vec2::new(1.0, half_y * 2.0 + 2.0),
    );
    spawn_slab(
        &mut commands,
        GameLayer::Ground,
        Vec2::new(-half_x * 0.4, -half_y * 0.4),
        Vec2::new(4.0, 0.5),
    );
    spawn_slab(
        &mut commands,
        GameLayer::Ground,
        Vec2::new(half_x * 0.4, 0.0),
        Vec2::new(4.0, 0.5),
    );
}

pub(crate) fn spawn_characters(mut commands: Commands, tuning: Res<GameTuning>) {
    let player_pool = spawn_projectile_pool(&mut commands, Team::Player, &tuning.player);
    commands.spawn((
        CharacterBundle::new(Team::Player, &tuning.player, tuning.arena.player_spawn_point()),
        Player,
        HumanControlled,
        player_pool,
    ));

    let enemy_pool = spawn_projectile_pool(&mut commands, Team::Enemy, &tuning.enemy);
    let enemy = commands
        .spawn((
            CharacterBundle::new(Team::Enemy, &tuning.enemy, tuning.arena.enemy_spawn_point()),
            enemy_pool,
        ))
        .id();

    match tuning.enemy_driver {
        EnemyDriver::Patrol => {
            let patrol = &tuning.patrol;
            commands.entity(enemy).insert(PatrolDriver::new(
                ControlVector::new(patrol.horizontal, patrol.jump, patrol.attack),
                patrol.flip_interval,
            ));
        }
        EnemyDriver::Policy => {
            commands.entity(enemy).insert(PolicyDriver::default());
        }
    }

    info!("Spawned player and {:?}-driven enemy", tuning.enemy_driver);
}
