//! The player's emitter against the real physics ray cast.
//!
//! The player spawns at the origin facing +Y. The middle target sits at (0, 120) with
//! radius 16, so a shot hits it 104 px out.

mod common;

use bevy::prelude::*;
use raycast_arena::common::layers::Layer;
use raycast_arena::plugins::emitter::{EmitterConfig, EmitterLine, EmitterState, FireRequest};
use raycast_arena::plugins::enemies::Enemy;
use raycast_arena::plugins::health::Health;
use raycast_arena::plugins::player::Player;

fn middle_target(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<(Entity, &Transform), With<Enemy>>()
        .iter(app.world())
        .find(|(_, tf)| tf.translation.x == 0.0)
        .map(|(e, _)| e)
        .expect("middle target")
}

fn ready_app() -> (App, Entity, Entity) {
    let mut app = common::app_headless();
    // Let colliders settle into the spatial query structures.
    common::step(&mut app, 10);
    let player = common::single::<With<Player>>(&mut app);
    let target = middle_target(&mut app);
    (app, player, target)
}

fn fire(app: &mut App, emitter: Entity) {
    app.world_mut().write_message(FireRequest { emitter });
    app.update();
}

#[test]
fn shot_hits_the_first_target_on_the_ray() {
    let (mut app, player, target) = ready_app();

    fire(&mut app, player);

    assert_eq!(app.world().get::<Health>(target).unwrap().hp, 4);

    let state = app.world().get::<EmitterState>(player).unwrap();
    assert!(state.firing);
    assert!(
        (state.end_point - Vec2::new(0.0, 104.0)).length() < 0.5,
        "end point {:?}",
        state.end_point
    );
    let line = app.world().get::<EmitterLine>(player).unwrap();
    assert!(line.visible);
    assert_eq!(line.end, state.end_point);
}

#[test]
fn cooldown_drops_requests_then_recovers() {
    let (mut app, player, target) = ready_app();

    fire(&mut app, player);
    fire(&mut app, player);
    assert_eq!(app.world().get::<Health>(target).unwrap().hp, 4);

    // 0.25 s cooldown at 16 ms per frame.
    common::step(&mut app, 17);
    assert!(!app.world().get::<EmitterState>(player).unwrap().firing);
    assert!(!app.world().get::<EmitterLine>(player).unwrap().visible);

    fire(&mut app, player);
    assert_eq!(app.world().get::<Health>(target).unwrap().hp, 3);
}

#[test]
fn target_dies_after_enough_hits() {
    let (mut app, player, target) = ready_app();

    for _ in 0..5 {
        fire(&mut app, player);
        common::step(&mut app, 17);
    }

    assert!(app.world().get_entity(target).is_err());
}

#[test]
fn mask_without_enemy_layer_passes_through_targets() {
    let (mut app, player, target) = ready_app();
    app.world_mut()
        .get_mut::<EmitterConfig>(player)
        .unwrap()
        .mask = Layer::World.into();

    fire(&mut app, player);

    assert_eq!(app.world().get::<Health>(target).unwrap().hp, 5);

    // Range 200 stops short of the top wall, so the ray runs its full length.
    let state = app.world().get::<EmitterState>(player).unwrap();
    assert!(state.firing);
    assert!(
        (state.end_point - Vec2::new(0.0, 200.0)).length() < 0.5,
        "end point {:?}",
        state.end_point
    );
}

#[test]
fn world_layer_in_mask_stops_on_walls() {
    let (mut app, player, target) = ready_app();
    {
        let mut config = app.world_mut().get_mut::<EmitterConfig>(player).unwrap();
        config.mask = Layer::World.into();
        config.range = 1_000.0;
    }

    fire(&mut app, player);

    assert_eq!(app.world().get::<Health>(target).unwrap().hp, 5);
    // Top wall's inner face.
    let state = app.world().get::<EmitterState>(player).unwrap();
    assert!(
        (state.end_point - Vec2::new(0.0, 400.0)).length() < 0.5,
        "end point {:?}",
        state.end_point
    );
}
