//! Gameplay ordering inside `Update`.
//!
//! ```text
//! Timers -> Input -> Act -> Resolve
//! ```
//!
//! Timer expiries are delivered before any new trigger is read, and every trigger
//! is acted on before damage is resolved. Everything runs on one schedule, so a
//! fire and a timer expiry for the same emitter never interleave.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySystems {
    /// Tick one-shot/repeating timers and publish expiries.
    Timers,
    /// Sample input devices and publish trigger requests.
    Input,
    /// Consume requests: fire emitters and guns, spawn templates.
    Act,
    /// Apply damage and publish health changes.
    Resolve,
}

pub fn configure(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameplaySystems::Timers,
            GameplaySystems::Input,
            GameplaySystems::Act,
            GameplaySystems::Resolve,
        )
            .chain(),
    );
}
