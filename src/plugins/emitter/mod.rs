//! Timed raycast emitter: a hit-scan weapon with a cooldown and a short-lived line.
//!
//! ```text
//!   Update
//!   Timers:  tick_one_shot_timers::<EmitterTimer> -> handle_emitter_timers
//!            reset_new_emitters, attach_beams
//!   Input:   request_fire_from_signals, debug_fire_on_click   (write FireRequest)
//!   Act:     fire_emitters        (SpatialQuery ray, write DamageDealt)
//!   Resolve: health::apply_damage (elsewhere)
//!
//!   PostUpdate
//!   sync_beams                    (EmitterLine -> beam sprite)
//! ```
//!
//! The `firing` flag is the only guard against re-entrant fire. It is enough because
//! requests and timer expiries for an emitter are handled one at a time, in the order
//! above, on a single schedule. Extra requests during a cooldown are dropped, never
//! queued.

pub mod components;
pub mod hitscan;
pub mod shot;
pub mod systems;

use bevy::prelude::*;

use crate::common::sets::GameplaySystems;
use crate::plugins::{input, timers};

pub use components::*;

pub fn plugin(app: &mut App) {
    timers::plugin::<EmitterTimer>(app);

    app.add_message::<FireRequest>()
        .add_systems(
            Update,
            (
                systems::reset_new_emitters,
                systems::attach_beams,
                systems::handle_emitter_timers
                    .after(timers::tick_one_shot_timers::<EmitterTimer>),
            )
                .in_set(GameplaySystems::Timers),
        )
        .add_systems(
            Update,
            (
                systems::request_fire_from_signals.after(input::emit_button_signals),
                systems::debug_fire_on_click,
            )
                .in_set(GameplaySystems::Input),
        )
        .add_systems(
            Update,
            systems::fire_emitters.in_set(GameplaySystems::Act),
        )
        .add_systems(PostUpdate, systems::sync_beams);
}

/// Gizmo drawing needs the render stack.
pub fn register_render(app: &mut App) {
    app.add_systems(Update, systems::draw_debug_range);
}
