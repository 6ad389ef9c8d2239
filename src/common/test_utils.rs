//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) runs a system without building a
//! full schedule. Systems that use `Commands` only enqueue structural changes, so we call
//! `world.flush()` afterwards to apply them before assertions.

use std::time::Duration;

use bevy::ecs::message::{Message, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Insert a generic `Time` whose last frame lasted `delta`.
pub fn set_frame_delta(world: &mut World, delta: Duration) {
    let mut time = Time::<()>::default();
    time.advance_by(delta);
    world.insert_resource(time);
}

/// Drain every buffered message of type `M`.
///
/// Each `run_system_once` builds a fresh reader that starts from the oldest buffered
/// message, so tests drain what they have asserted on.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}
