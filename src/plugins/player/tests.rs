use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::emitter::{EmitterConfig, EmitterDebug, EmitterState};
use crate::plugins::health::Health;

#[test]
fn spawn_creates_armed_player() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, super::spawn);

    let (health, config, state) = world
        .query_filtered::<(&Health, &EmitterConfig, &EmitterState), With<super::Player>>()
        .single(&world)
        .expect("exactly one player");
    assert_eq!(health.hp, 50);
    assert_eq!(config.fire_time, Duration::from_millis(250));
    assert_eq!(config.line_visible_time, Duration::from_millis(100));
    assert!(!state.firing);

    assert_eq!(world.query::<&EmitterDebug>().iter(&world).count(), 0);
}

#[test]
fn debug_tunable_attaches_emitter_debug() {
    let mut world = World::new();
    world.insert_resource(Tunables {
        emitter_debug: true,
        ..Tunables::default()
    });
    run_system_once(&mut world, super::spawn);

    assert_eq!(world.query::<&EmitterDebug>().iter(&world).count(), 1);
}

#[test]
fn gather_input_normalizes_diagonals() {
    let mut world = World::new();
    world.insert_resource(super::PlayerInput::default());
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::KeyD);
    world.insert_resource(keys);

    run_system_once(&mut world, super::gather_input);

    let axis = world.resource::<super::PlayerInput>().move_axis;
    assert!((axis.length() - 1.0).abs() < 1e-5);
    assert!(axis.x > 0.0 && axis.y > 0.0);
}

#[test]
fn apply_movement_sets_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables {
        player_speed: 100.0,
        ..Tunables::default()
    });
    world.insert_resource(super::PlayerInput {
        move_axis: Vec2::new(1.0, 0.0),
    });
    world.spawn((super::Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(100.0, 0.0));
}
