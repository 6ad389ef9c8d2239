//! The fire sequence.
//!
//! ```text
//! Idle ──fire──► Cooldown ──ResetFire (fire_time)──► Idle
//!                  │
//!                  └─ line shown ──ResetLine (line_visible_time)──► line hidden
//! ```

use bevy::prelude::*;

use super::components::{EmitterConfig, EmitterLine, EmitterState, EmitterTimer, EmitterTimers};
use super::hitscan::{HitScan, ScanHit};

/// Outcome of an accepted fire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub origin: Vec2,
    pub end_point: Vec2,
    /// The entity to notify of `EmitterConfig::damage`, if anything was hit.
    pub hit: Option<ScanHit>,
}

/// Fire once from `origin` along `direction`.
///
/// Returns `None` (and changes nothing) while the emitter is cooling down.
pub fn fire(
    config: &EmitterConfig,
    state: &mut EmitterState,
    line: &mut EmitterLine,
    timers: &mut EmitterTimers,
    origin: Vec2,
    direction: Dir2,
    scanner: &impl HitScan,
) -> Option<Shot> {
    if state.firing {
        return None;
    }
    state.firing = true;
    state.origin = origin;
    state.direction = direction;
    state.end_point = origin + *direction * config.range;

    let hit = scanner.hit_scan(origin, direction, config.range, config.mask);
    if let Some(hit) = hit {
        state.end_point = hit.point;
    }

    line.show(origin, state.end_point);

    timers.once(config.fire_time, EmitterTimer::ResetFire);
    timers.once(config.line_visible_time, EmitterTimer::ResetLine);

    Some(Shot {
        origin,
        end_point: state.end_point,
        hit,
    })
}
