//! Global state machine.
//!
//! Everything spawned for a round carries `DespawnOnExit(GameState::InGame)`, so
//! leaving the state clears the arena along with any pending entity timers.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
