//! Input plugin: mouse-button handlers and cursor aiming.
//!
//! A `MouseButtonHandler` watches one button and publishes what happened to it this
//! frame as `ButtonSignal` messages addressed from its own entity:
//! - `Down`: the frame the button went down
//! - `Held`: every frame it is down (about one per frame, so expect many)
//! - `Up`: the frame it was released
//!
//! Consumers bind to a phase with `FireOn` on the same entity.
//!
//! `AimAtCursor` turns an entity so its local +Y points at the cursor in world space.

use bevy::prelude::*;

use crate::common::sets::GameplaySystems;
use crate::plugins::camera::MainCamera;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonPhase {
    Down,
    Held,
    Up,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct MouseButtonHandler {
    pub button: MouseButton,
}

/// Trigger the entity's action when its handler reports this phase.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireOn(pub ButtonPhase);

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSignal {
    pub source: Entity,
    pub phase: ButtonPhase,
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AimAtCursor;

pub fn plugin(app: &mut App) {
    app.add_message::<ButtonSignal>().add_systems(
        Update,
        (emit_button_signals, aim_at_cursor).in_set(GameplaySystems::Input),
    );
}

/// The phases `button` is in this frame, in Down, Held, Up order.
pub fn phases(
    buttons: &ButtonInput<MouseButton>,
    button: MouseButton,
) -> impl Iterator<Item = ButtonPhase> {
    [
        (ButtonPhase::Down, buttons.just_pressed(button)),
        (ButtonPhase::Held, buttons.pressed(button)),
        (ButtonPhase::Up, buttons.just_released(button)),
    ]
    .into_iter()
    .filter_map(|(phase, active)| active.then_some(phase))
}

pub fn emit_button_signals(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    q: Query<(Entity, &MouseButtonHandler)>,
    mut writer: MessageWriter<ButtonSignal>,
) {
    // Headless apps have no input plugin.
    let Some(buttons) = buttons else {
        return;
    };

    for (source, handler) in &q {
        for phase in phases(&buttons, handler.button) {
            writer.write(ButtonSignal { source, phase });
        }
    }
}

/// Rotation about Z that points local +Y along `dir`.
#[inline]
pub fn facing_rotation(dir: Vec2) -> Quat {
    // +Y is a quarter turn from +X.
    Quat::from_rotation_z(dir.y.atan2(dir.x) - std::f32::consts::FRAC_PI_2)
}

fn aim_at_cursor(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut q_aim: Query<&mut Transform, With<AimAtCursor>>,
) {
    if q_aim.is_empty() {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_tf)) = q_camera.single() else {
        debug!("aim_at_cursor: no single MainCamera");
        return;
    };
    let world_cursor = match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => p,
        Err(e) => {
            debug!("viewport_to_world_2d failed: {e:?}");
            return;
        }
    };

    for mut tf in &mut q_aim {
        let dir = world_cursor - tf.translation.truncate();
        if dir.length_squared() < 1e-4 {
            continue;
        }
        tf.rotation = facing_rotation(dir);
    }
}

#[cfg(test)]
mod tests;
