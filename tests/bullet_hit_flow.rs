use avian2d::prelude::*;
use bevy::prelude::*;
use raycast_arena::common::sets::{self, GameplaySystems};
use raycast_arena::plugins::bullets::{systems::process_bullet_hits, Bullet};
use raycast_arena::plugins::health::{self, Health};

#[test]
fn bullet_hit_damages_target_and_despawns_bullet() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    sets::configure(&mut app);
    health::plugin(&mut app);

    app.add_message::<CollisionStart>();
    app.add_systems(Update, process_bullet_hits.before(GameplaySystems::Resolve));

    let bullet = app.world_mut().spawn(Bullet { damage: 3 }).id();
    let target = app.world_mut().spawn(Health::new(5)).id();

    app.world_mut().write_message(CollisionStart {
        collider1: bullet,
        collider2: target,
        body1: None,
        body2: None,
    });

    app.update();

    assert!(app.world().get_entity(bullet).is_err());
    assert_eq!(app.world().get::<Health>(target).unwrap().hp, 2);
}
