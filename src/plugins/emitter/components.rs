use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;
use crate::plugins::timers::OneShotTimers;

/// Delayed actions an emitter schedules on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterTimer {
    /// Cooldown over: accept the next fire.
    ResetFire,
    /// Hide the line and collapse it onto the origin.
    ResetLine,
}

pub type EmitterTimers = OneShotTimers<EmitterTimer>;

/// Hit-scan weapon settings. Not modified after spawn.
///
/// `line_visible_time` should be shorter than `fire_time` so the line is gone before
/// the next shot can happen. This is not checked.
#[derive(Component, Debug, Clone)]
#[require(Transform, EmitterState, EmitterLine, EmitterTimers)]
pub struct EmitterConfig {
    pub damage: u32,
    pub range: f32,
    pub mask: LayerMask,
    pub fire_time: Duration,
    pub line_visible_time: Duration,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            damage: 1,
            range: 10.0,
            mask: Layer::Enemy.into(),
            fire_time: Duration::from_millis(250),
            line_visible_time: Duration::from_millis(100),
        }
    }
}

impl EmitterConfig {
    pub fn from_tunables(tunables: &Tunables, mask: impl Into<LayerMask>) -> Self {
        Self {
            damage: tunables.emitter_damage,
            range: tunables.emitter_range,
            mask: mask.into(),
            fire_time: tunables.emitter_fire_time,
            line_visible_time: tunables.emitter_line_visible_time,
        }
    }
}

/// Mutable emitter state.
///
/// Two states: Idle (`firing == false`) and Cooldown (`firing == true`).
/// Only `fire` and the `EmitterTimer` handlers write to it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EmitterState {
    pub firing: bool,
    pub origin: Vec2,
    pub direction: Dir2,
    /// Last computed hit point, or the max-range point if the last shot missed.
    pub end_point: Vec2,
}

impl Default for EmitterState {
    fn default() -> Self {
        Self {
            firing: false,
            origin: Vec2::ZERO,
            direction: Dir2::Y,
            end_point: Vec2::ZERO,
        }
    }
}

impl EmitterState {
    /// Back to Idle with everything collapsed onto `origin`.
    pub fn reset(&mut self, origin: Vec2) {
        self.firing = false;
        self.origin = origin;
        self.end_point = origin;
    }
}

/// The emitter's visible line: two endpoints and an on/off switch.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct EmitterLine {
    pub visible: bool,
    pub start: Vec2,
    pub end: Vec2,
}

impl EmitterLine {
    #[inline]
    pub fn show(&mut self, start: Vec2, end: Vec2) {
        self.start = start;
        self.end = end;
        self.visible = true;
    }

    /// Hide and put both endpoints on `origin` so a re-enable never flashes a stale segment.
    #[inline]
    pub fn hide_at(&mut self, origin: Vec2) {
        self.visible = false;
        self.start = origin;
        self.end = origin;
    }
}

/// Ask an emitter to fire. Dropped silently while the emitter is cooling down.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireRequest {
    pub emitter: Entity,
}

/// Sprite that renders an emitter's `EmitterLine`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Beam {
    pub emitter: Entity,
}

/// Debug helper: fire on left click and draw the max-range line.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct EmitterDebug;
