//! World plugin: the arena.
//!
//! Four static walls on the `World` layer. Emitter rays and bullets both stop on
//! them, and the player cannot leave.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

pub const HALF_W: f32 = 640.0;
pub const HALF_H: f32 = 400.0;
const THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_arena);
}

/// Name, center, and size of each wall.
fn walls() -> [(&'static str, Vec2, Vec2); 4] {
    let horizontal = Vec2::new(HALF_W * 2.0 + THICKNESS * 2.0, THICKNESS);
    let vertical = Vec2::new(THICKNESS, HALF_H * 2.0);
    let dy = HALF_H + THICKNESS * 0.5;
    let dx = HALF_W + THICKNESS * 0.5;
    [
        ("WallTop", Vec2::new(0.0, dy), horizontal),
        ("WallBottom", Vec2::new(0.0, -dy), horizontal),
        ("WallLeft", Vec2::new(-dx, 0.0), vertical),
        ("WallRight", Vec2::new(dx, 0.0), vertical),
    ]
}

fn spawn_arena(mut commands: Commands) {
    let wall_layers = CollisionLayers::new(
        Layer::World,
        [
            Layer::Player,
            Layer::Enemy,
            Layer::PlayerBullet,
            Layer::EnemyBullet,
        ],
    );

    for (name, center, size) in walls() {
        commands.spawn((
            Name::new(name),
            Sprite {
                color: Color::srgb(0.25, 0.27, 0.33),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}
