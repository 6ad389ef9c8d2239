//! Health plugin: the damage-receiving capability.
//!
//! Damage is delivered as a `DamageDealt` message addressed to an entity. Only
//! entities carrying `Health` react to it; messages for anything else are dropped,
//! so a shooter never has to know what it hit.
//!
//! Health changes are published as `HealthChanged` messages. Consumers subscribe by
//! adding a system with a `MessageReader<HealthChanged>` and filtering for the
//! entities they care about (see `track_player_health`).
//!
//! ```text
//! Update/Resolve:  announce_new_health -> apply_damage -> track_player_health
//! PostUpdate:      despawn_depleted
//! ```

use bevy::prelude::*;

use crate::common::sets::GameplaySystems;
use crate::plugins::player::Player;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub hp: i32,
}

impl Health {
    pub fn new(hp: i32) -> Self {
        Self { hp }
    }

    #[inline]
    pub fn take_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.hp = self.hp.saturating_sub(amount);
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.hp <= 0
    }
}

/// Fire-and-forget damage notification.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageDealt {
    pub target: Entity,
    pub amount: u32,
    pub source: Option<Entity>,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthChanged {
    pub entity: Entity,
    pub hp: i32,
}

/// Marker: health ran out; the entity is removed in `PostUpdate`.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// Last health value reported for the player. `None` until the player has spawned.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHealth(pub Option<i32>);

pub fn plugin(app: &mut App) {
    app.add_message::<DamageDealt>()
        .add_message::<HealthChanged>()
        .init_resource::<PlayerHealth>()
        .add_systems(
            Update,
            (announce_new_health, apply_damage, track_player_health)
                .chain()
                .in_set(GameplaySystems::Resolve),
        )
        .add_systems(PostUpdate, despawn_depleted);
}

/// Publish the starting value of every freshly added `Health`.
pub fn announce_new_health(
    q: Query<(Entity, &Health), Added<Health>>,
    mut writer: MessageWriter<HealthChanged>,
) {
    for (entity, health) in &q {
        writer.write(HealthChanged { entity, hp: health.hp });
    }
}

pub fn apply_damage(
    mut commands: Commands,
    mut reader: MessageReader<DamageDealt>,
    mut q: Query<(&mut Health, Option<&Name>), Without<PendingDespawn>>,
    mut writer: MessageWriter<HealthChanged>,
) {
    for hit in reader.read() {
        // No receiver: not an error.
        let Ok((mut health, name)) = q.get_mut(hit.target) else {
            continue;
        };

        let was_alive = !health.is_depleted();
        health.take_damage(hit.amount);
        writer.write(HealthChanged {
            entity: hit.target,
            hp: health.hp,
        });

        if was_alive && health.is_depleted() {
            info!(
                "{} died ({} damage from {:?})",
                name.map_or("entity", Name::as_str),
                hit.amount,
                hit.source
            );
            commands.entity(hit.target).insert(PendingDespawn);
        }
    }
}

/// Player-scoped subscriber: mirrors the player's health into `PlayerHealth`.
pub fn track_player_health(
    mut reader: MessageReader<HealthChanged>,
    q_player: Query<(), With<Player>>,
    mut readout: ResMut<PlayerHealth>,
) {
    for change in reader.read() {
        if q_player.contains(change.entity) {
            readout.0 = Some(change.hp);
        }
    }
}

fn despawn_depleted(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
