use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::{ButtonPhase, ButtonSignal, MouseButtonHandler};
use crate::common::test_utils::{drain_messages, run_system_once};

fn phases(buttons: &ButtonInput<MouseButton>, button: MouseButton) -> Vec<ButtonPhase> {
    super::phases(buttons, button).collect()
}

#[test]
fn press_frame_reports_down_and_held() {
    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);

    assert_eq!(
        phases(&buttons, MouseButton::Left),
        vec![ButtonPhase::Down, ButtonPhase::Held]
    );
    assert!(phases(&buttons, MouseButton::Right).is_empty());
}

#[test]
fn held_then_released() {
    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    buttons.clear();
    assert_eq!(
        phases(&buttons, MouseButton::Left),
        vec![ButtonPhase::Held]
    );

    buttons.release(MouseButton::Left);
    assert_eq!(
        phases(&buttons, MouseButton::Left),
        vec![ButtonPhase::Up]
    );
}

#[test]
fn signals_come_from_the_matching_handler() {
    let mut world = World::new();
    world.init_resource::<Messages<ButtonSignal>>();

    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Right);
    world.insert_resource(buttons);

    world.spawn(MouseButtonHandler { button: MouseButton::Left });
    let right = world
        .spawn(MouseButtonHandler { button: MouseButton::Right })
        .id();

    run_system_once(&mut world, super::emit_button_signals);

    assert_eq!(
        drain_messages::<ButtonSignal>(&mut world),
        vec![
            ButtonSignal { source: right, phase: ButtonPhase::Down },
            ButtonSignal { source: right, phase: ButtonPhase::Held },
        ]
    );
}

#[test]
fn no_input_resource_is_a_no_op() {
    let mut world = World::new();
    world.init_resource::<Messages<ButtonSignal>>();
    world.spawn(MouseButtonHandler { button: MouseButton::Left });

    run_system_once(&mut world, super::emit_button_signals);

    assert!(drain_messages::<ButtonSignal>(&mut world).is_empty());
}

#[test]
fn facing_rotation_points_up_axis_at_target() {
    for dir in [Vec2::X, Vec2::Y, Vec2::NEG_X, Vec2::new(-3.0, -4.0)] {
        let up = (super::facing_rotation(dir) * Vec3::Y).truncate();
        assert!(up.abs_diff_eq(dir.normalize(), 1e-5), "{dir:?} -> {up:?}");
    }
}
