//! Enemies plugin: stationary damageable targets.
//!
//! A target is a static circle on the `Enemy` layer with `Health`. It reacts to
//! damage only through the health plugin, and darkens as it loses health so hits
//! are readable without any effects layer.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::{layers::Layer, sets::GameplaySystems, state::GameState, tunables::Tunables};
use crate::plugins::health::{Health, HealthChanged};

const TARGET_RADIUS: f32 = 16.0;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Enemy;

/// Starting health, for the damage tint.
#[derive(Component, Debug, Clone, Copy)]
pub struct MaxHealth(pub i32);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_targets)
        .add_systems(
            Update,
            tint_damaged_targets
                .after(crate::plugins::health::apply_damage)
                .in_set(GameplaySystems::Resolve),
        );
}

/// Everything a target needs, placed at `transform`.
pub fn target_bundle(tunables: &Tunables, transform: Transform) -> impl Bundle {
    (
        Name::new("Target"),
        Enemy,
        Health::new(tunables.target_health),
        MaxHealth(tunables.target_health),
        Sprite {
            color: target_color(1.0),
            custom_size: Some(Vec2::splat(TARGET_RADIUS * 2.0)),
            ..default()
        },
        transform,
        RigidBody::Static,
        Collider::circle(TARGET_RADIUS),
        CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player, Layer::PlayerBullet]),
        Occluder2d::circle(TARGET_RADIUS),
        DespawnOnExit(GameState::InGame),
    )
}

/// Spawn a few stationary targets.
fn spawn_targets(mut commands: Commands, tunables: Res<Tunables>) {
    for x in [-200.0, 0.0, 200.0] {
        commands.spawn(target_bundle(&tunables, Transform::from_xyz(x, 120.0, 1.0)));
    }
}

/// Full red at full health, fading toward grey as health drops.
#[inline]
fn target_color(health_fraction: f32) -> Color {
    let t = health_fraction.clamp(0.0, 1.0);
    Color::srgb(0.35 + 0.55 * t, 0.25, 0.25)
}

fn tint_damaged_targets(
    mut reader: MessageReader<HealthChanged>,
    mut q: Query<(&MaxHealth, &mut Sprite), With<Enemy>>,
) {
    for change in reader.read() {
        let Ok((max, mut sprite)) = q.get_mut(change.entity) else {
            continue;
        };
        sprite.color = target_color(change.hp as f32 / max.0.max(1) as f32);
    }
}
