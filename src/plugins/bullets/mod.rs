//! Bullets: a held-trigger gun, bullet lifetime, and hit processing.
//!
//! Hits are not resolved here: a bullet that starts touching anything sends a
//! `DamageDealt` to whatever it touched and is removed. Whether that hurts is up to
//! the target.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

mod components;
pub mod systems;

pub use components::*;

use crate::common::sets::GameplaySystems;
use crate::plugins::timers;

pub fn plugin(app: &mut App) {
    timers::plugin::<GunTimer>(app);

    app.add_systems(
        Update,
        systems::handle_gun_timers
            .after(timers::tick_one_shot_timers::<GunTimer>)
            .in_set(GameplaySystems::Timers),
    )
    .add_systems(Update, systems::fire_guns.in_set(GameplaySystems::Act))
    .add_systems(FixedUpdate, systems::bullet_lifetime)
    .add_systems(
        FixedPostUpdate,
        systems::process_bullet_hits.after(CollisionEventSystems),
    );
}
