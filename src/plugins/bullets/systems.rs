use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::emitter::systems::muzzle;
use crate::plugins::health::DamageDealt;
use crate::plugins::timers::TimerElapsed;

use super::{Bullet, BulletGun, BulletSide, GunTimer, GunTimers, Lifetime};

/// A free-flying bullet.
///
/// `CollisionEventsEnabled` opts the bullet in to `CollisionStart` messages.
pub fn bullet_bundle(
    side: BulletSide,
    pos: Vec2,
    vel: Vec2,
    damage: u32,
    lifetime: f32,
) -> impl Bundle {
    (
        Name::new("Bullet"),
        Bullet { damage },
        Lifetime(Timer::from_seconds(lifetime, TimerMode::Once)),
        Sprite {
            color: side.color(),
            custom_size: Some(Vec2::splat(8.0)),
            ..default()
        },
        Transform::from_translation(pos.extend(2.0)),
        RigidBody::Dynamic,
        Collider::circle(4.0),
        side.layers(),
        LinearVelocity(vel),
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    )
}

/// Spawn a bullet for every gun whose trigger is held and which is not cooling down.
pub fn fire_guns(
    mut commands: Commands,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut q: Query<(&Transform, &mut BulletGun, &mut GunTimers)>,
) {
    let Some(buttons) = buttons else {
        return;
    };

    for (tf, mut gun, mut timers) in &mut q {
        if gun.firing || !buttons.pressed(gun.trigger) {
            continue;
        }
        gun.firing = true;
        timers.once(gun.fire_time, GunTimer::Ready);

        let (origin, direction) = muzzle(tf);
        commands.spawn(bullet_bundle(
            BulletSide::Player,
            origin + *direction * gun.muzzle_offset,
            *direction * gun.speed,
            gun.damage,
            gun.lifetime,
        ));
    }
}

pub fn handle_gun_timers(
    mut reader: MessageReader<TimerElapsed<GunTimer>>,
    mut q: Query<&mut BulletGun>,
) {
    for elapsed in reader.read() {
        let Ok(mut gun) = q.get_mut(elapsed.owner) else {
            continue;
        };
        match elapsed.action {
            GunTimer::Ready => gun.firing = false,
        }
    }
}

pub fn bullet_lifetime(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Lifetime)>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            commands.entity(e).despawn();
        }
    }
}

/// Bulk collision processing for bullet hits.
///
/// A bullet touching two things in one step only counts the first.
pub fn process_bullet_hits(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_bullets: Query<&Bullet>,
    mut damage: MessageWriter<DamageDealt>,
    mut spent: Local<HashSet<Entity>>,
) {
    spent.clear();

    for ev in started.read() {
        let (bullet, other) = if q_bullets.contains(ev.collider1) {
            (ev.collider1, ev.body2.unwrap_or(ev.collider2))
        } else if q_bullets.contains(ev.collider2) {
            (ev.collider2, ev.body1.unwrap_or(ev.collider1))
        } else {
            continue;
        };

        if !spent.insert(bullet) {
            continue;
        }

        let Ok(b) = q_bullets.get(bullet) else {
            continue;
        };
        damage.write(DamageDealt {
            target: other,
            amount: b.damage,
            source: Some(bullet),
        });
        commands.entity(bullet).despawn();
    }
}
