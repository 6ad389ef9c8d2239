//! Spawner plugin: instantiate a template at the spawner's position and rotation.
//!
//! `SpawnRequest` spawns once. `SpawnTimer` writes a request every period, starting
//! one full period after it is added. Templates are code-defined bundles.
//!
//! The arena gets two target spawners up top and a turret below the player that
//! shoots hostile bullets straight up.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{sets::GameplaySystems, state::GameState, tunables::Tunables};
use crate::plugins::bullets::{systems::bullet_bundle, BulletSide};
use crate::plugins::emitter::systems::muzzle;
use crate::plugins::enemies::target_bundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnTemplate {
    /// A damageable target.
    Target,
    /// A hostile bullet flying along the spawner's facing.
    Bullet,
}

#[derive(Component, Debug, Clone, Copy)]
#[require(Transform)]
pub struct Spawner {
    pub template: SpawnTemplate,
}

/// Repeating spawn period.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct SpawnTimer(pub Timer);

impl SpawnTimer {
    pub fn every(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Repeating))
    }
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRequest {
    pub spawner: Entity,
}

pub fn plugin(app: &mut App) {
    app.add_message::<SpawnRequest>()
        .add_systems(OnEnter(GameState::InGame), spawn_spawners)
        .add_systems(Update, tick_spawn_timers.in_set(GameplaySystems::Timers))
        .add_systems(Update, spawn_requested.in_set(GameplaySystems::Act));
}

fn spawn_spawners(mut commands: Commands, tunables: Res<Tunables>) {
    for (i, x) in [-400.0, 400.0].into_iter().enumerate() {
        commands.spawn((
            Name::new(format!("TargetSpawner{i}")),
            Spawner {
                template: SpawnTemplate::Target,
            },
            SpawnTimer::every(tunables.spawn_time),
            Transform::from_xyz(x, 300.0, 1.0),
            DespawnOnExit(GameState::InGame),
        ));
    }

    commands.spawn((
        Name::new("Turret"),
        Spawner {
            template: SpawnTemplate::Bullet,
        },
        SpawnTimer::every(tunables.spawn_time),
        Transform::from_xyz(0.0, -360.0, 1.0),
        DespawnOnExit(GameState::InGame),
    ));
}

pub fn tick_spawn_timers(
    time: Res<Time>,
    mut q: Query<(Entity, &mut SpawnTimer), With<Spawner>>,
    mut writer: MessageWriter<SpawnRequest>,
) {
    for (spawner, mut timer) in &mut q {
        timer.tick(time.delta());
        // A long frame can cover several periods.
        for _ in 0..timer.times_finished_this_tick() {
            writer.write(SpawnRequest { spawner });
        }
    }
}

pub fn spawn_requested(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<SpawnRequest>,
    q: Query<(&Spawner, &Transform, Option<&Name>)>,
) {
    for req in reader.read() {
        let Ok((spawner, tf, name)) = q.get(req.spawner) else {
            debug!("spawn request for missing spawner {:?}", req.spawner);
            continue;
        };

        match spawner.template {
            SpawnTemplate::Target => {
                let at = Transform::from_translation(tf.translation).with_rotation(tf.rotation);
                commands.spawn(target_bundle(&tunables, at));
            }
            SpawnTemplate::Bullet => {
                let (origin, direction) = muzzle(tf);
                commands.spawn(bullet_bundle(
                    BulletSide::Hostile,
                    origin,
                    *direction * tunables.bullet_speed,
                    tunables.bullet_damage,
                    tunables.bullet_lifetime,
                ));
            }
        }
        info!(
            "{} spawned {:?}",
            name.map_or("spawner", Name::as_str),
            spawner.template
        );
    }
}
