use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_preconfigured_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables {
        spawn_time: 1.0,
        ..Tunables::default()
    });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().spawn_time, 1.0);
}

#[test]
fn default_line_is_shorter_than_cooldown() {
    let t = Tunables::default();
    assert!(t.emitter_line_visible_time < t.emitter_fire_time);
}
