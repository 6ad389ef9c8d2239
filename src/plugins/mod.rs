//! Feature plugins.

use bevy::prelude::*;

pub mod bullets;
pub mod core;
pub mod emitter;
pub mod enemies;
pub mod health;
pub mod input;
pub mod physics;
pub mod player;
pub mod spawner;
pub mod timers;
pub mod world;

// Render-only
pub mod camera;
pub mod hud;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    input::plugin(app);
    health::plugin(app);
    emitter::plugin(app);
    bullets::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    spawner::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    hud::plugin(app);
    emitter::register_render(app);
}
