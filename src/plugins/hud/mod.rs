//! Player health readout (render-only).
//!
//! Reads `PlayerHealth`, which the health plugin keeps up to date from
//! `HealthChanged` messages for the player.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::health::PlayerHealth;

#[derive(Component)]
struct HealthText;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(
            Update,
            update_health_text.run_if(resource_changed::<PlayerHealth>),
        );
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HealthText"),
        HealthText,
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
    ));
}

fn health_label(health: PlayerHealth) -> String {
    match health.0 {
        Some(hp) if hp > 0 => format!("HP {hp}"),
        Some(_) => "DEAD".to_string(),
        None => String::new(),
    }
}

fn update_health_text(health: Res<PlayerHealth>, mut q: Query<&mut Text, With<HealthText>>) {
    for mut text in &mut q {
        text.0 = health_label(*health);
    }
}
