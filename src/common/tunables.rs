//! Tunable gameplay constants.
//!
//! Distances are in pixels. Weapon delays are `Duration`s so cooldown boundaries land
//! on whole frames; other durations are in seconds.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub player_health: i32,
    pub target_health: i32,

    pub emitter_damage: u32,
    pub emitter_range: f32,
    pub emitter_fire_time: Duration,
    pub emitter_line_visible_time: Duration,
    /// Click-to-fire and a max-range gizmo on the player's emitter.
    pub emitter_debug: bool,

    pub gun_fire_time: Duration,
    pub bullet_speed: f32,
    pub bullet_damage: u32,
    pub bullet_lifetime: f32,

    pub spawn_time: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            player_health: 50,
            target_health: 5,

            emitter_damage: 1,
            emitter_range: 10.0 * 20.0,
            emitter_fire_time: Duration::from_millis(250),
            emitter_line_visible_time: Duration::from_millis(100),
            emitter_debug: false,

            gun_fire_time: Duration::from_millis(500),
            bullet_speed: 900.0,
            bullet_damage: 1,
            bullet_lifetime: 3.0,

            spawn_time: 5.0,
        }
    }
}
