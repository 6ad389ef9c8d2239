use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::health::DamageDealt;
use crate::plugins::input::{facing_rotation, ButtonSignal, FireOn};
use crate::plugins::timers::TimerElapsed;

use super::components::{
    Beam, EmitterConfig, EmitterDebug, EmitterLine, EmitterState, EmitterTimer, EmitterTimers,
    FireRequest,
};
use super::hitscan::HitScan;
use super::shot;

const BEAM_WIDTH: f32 = 3.0;

/// Where an emitter is and which way it faces: translation and local +Y.
#[inline]
pub fn muzzle(tf: &Transform) -> (Vec2, Dir2) {
    let origin = tf.translation.truncate();
    let direction = Dir2::new((tf.rotation * Vec3::Y).truncate()).unwrap_or(Dir2::Y);
    (origin, direction)
}

/// Start every new emitter Idle with its line hidden on the origin.
pub fn reset_new_emitters(
    mut q: Query<(&Transform, &mut EmitterState, &mut EmitterLine), Added<EmitterConfig>>,
) {
    for (tf, mut state, mut line) in &mut q {
        let (origin, direction) = muzzle(tf);
        state.reset(origin);
        state.direction = direction;
        line.hide_at(origin);
    }
}

/// Give every new emitter a beam sprite.
pub fn attach_beams(mut commands: Commands, q: Query<Entity, Added<EmitterConfig>>) {
    for emitter in &q {
        commands.spawn((
            Name::new("Beam"),
            Beam { emitter },
            Sprite {
                color: Color::srgb(1.0, 0.35, 0.2),
                custom_size: Some(Vec2::new(BEAM_WIDTH, 0.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 3.0),
            Visibility::Hidden,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

pub fn handle_emitter_timers(
    mut reader: MessageReader<TimerElapsed<EmitterTimer>>,
    mut q: Query<(&Transform, &mut EmitterState, &mut EmitterLine)>,
) {
    for elapsed in reader.read() {
        let Ok((tf, mut state, mut line)) = q.get_mut(elapsed.owner) else {
            continue;
        };
        match elapsed.action {
            EmitterTimer::ResetFire => state.firing = false,
            EmitterTimer::ResetLine => line.hide_at(tf.translation.truncate()),
        }
    }
}

/// Turn the emitter's own button signals into fire requests.
pub fn request_fire_from_signals(
    mut reader: MessageReader<ButtonSignal>,
    q: Query<&FireOn, With<EmitterConfig>>,
    mut writer: MessageWriter<FireRequest>,
) {
    for signal in reader.read() {
        let Ok(fire_on) = q.get(signal.source) else {
            continue;
        };
        if fire_on.0 == signal.phase {
            writer.write(FireRequest {
                emitter: signal.source,
            });
        }
    }
}

pub fn debug_fire_on_click(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    q: Query<Entity, (With<EmitterDebug>, With<EmitterConfig>)>,
    mut writer: MessageWriter<FireRequest>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    for emitter in &q {
        writer.write(FireRequest { emitter });
    }
}

pub type FiringEmitters<'w, 's> = Query<
    'w,
    's,
    (
        &'static EmitterConfig,
        &'static Transform,
        &'static mut EmitterState,
        &'static mut EmitterLine,
        &'static mut EmitterTimers,
    ),
>;

pub fn fire_emitters(
    reader: MessageReader<FireRequest>,
    spatial: SpatialQuery,
    q_collider_of: Query<&ColliderOf>,
    q: FiringEmitters,
    damage: MessageWriter<DamageDealt>,
) {
    resolve_fire_requests(reader, &spatial, &q_collider_of, q, damage);
}

/// Apply every pending `FireRequest` against `scanner`.
pub fn resolve_fire_requests(
    mut reader: MessageReader<FireRequest>,
    scanner: &impl HitScan,
    q_collider_of: &Query<&ColliderOf>,
    mut q: FiringEmitters,
    mut damage: MessageWriter<DamageDealt>,
) {
    for req in reader.read() {
        let Ok((config, tf, mut state, mut line, mut timers)) = q.get_mut(req.emitter) else {
            continue;
        };

        let (origin, direction) = muzzle(tf);
        let Some(shot) = shot::fire(
            config,
            &mut state,
            &mut line,
            &mut timers,
            origin,
            direction,
            scanner,
        ) else {
            // Cooling down.
            continue;
        };

        if let Some(hit) = shot.hit {
            // Damage goes to the body that owns the collider.
            let target = q_collider_of.get(hit.entity).map_or(hit.entity, |c| c.body);
            damage.write(DamageDealt {
                target,
                amount: config.damage,
                source: Some(req.emitter),
            });
        }
    }
}

/// Stretch each beam sprite between its emitter's line endpoints.
pub fn sync_beams(
    mut commands: Commands,
    q_line: Query<&EmitterLine>,
    mut q_beam: Query<(Entity, &Beam, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    for (e, beam, mut tf, mut sprite, mut vis) in &mut q_beam {
        let Ok(line) = q_line.get(beam.emitter) else {
            commands.entity(e).despawn();
            continue;
        };

        if !line.visible {
            *vis = Visibility::Hidden;
            continue;
        }

        let span = line.end - line.start;
        let mid = (line.start + line.end) * 0.5;
        tf.translation = mid.extend(tf.translation.z);
        if span.length_squared() > 0.0 {
            tf.rotation = facing_rotation(span);
        }
        sprite.custom_size = Some(Vec2::new(BEAM_WIDTH, span.length()));
        *vis = Visibility::Visible;
    }
}

/// Red line from the emitter to its max range.
pub fn draw_debug_range(
    mut gizmos: Gizmos,
    q: Query<(&Transform, &EmitterConfig), With<EmitterDebug>>,
) {
    for (tf, config) in &q {
        let (origin, direction) = muzzle(tf);
        gizmos.line_2d(
            origin,
            origin + *direction * config.range,
            Color::srgb(1.0, 0.0, 0.0),
        );
    }
}
