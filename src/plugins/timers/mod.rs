//! One-shot timers owned by an entity.
//!
//! A delayed call is a typed action stored next to a `Timer` in a component on the
//! entity that scheduled it. When the timer finishes, the action is published as a
//! `TimerElapsed<A>` message and the entry is dropped.
//!
//! Cancellation is structural: despawning the owner drops the component, and with it
//! every pending action. There is no explicit cancel call.

use std::fmt::Debug;
use std::time::Duration;

use bevy::prelude::*;

use crate::common::sets::GameplaySystems;

/// Anything that can be scheduled: small, copyable, and thread-safe.
pub trait TimerAction: Copy + Debug + Send + Sync + 'static {}

impl<T: Copy + Debug + Send + Sync + 'static> TimerAction for T {}

#[derive(Component, Debug)]
pub struct OneShotTimers<A: TimerAction> {
    pending: Vec<(Timer, A)>,
}

impl<A: TimerAction> Default for OneShotTimers<A> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<A: TimerAction> OneShotTimers<A> {
    /// Schedule `action` to fire once `delay` has elapsed. A zero delay fires on the
    /// next tick.
    pub fn once(&mut self, delay: Duration, action: A) {
        self.pending.push((Timer::new(delay, TimerMode::Once), action));
    }

    /// Advance every pending timer by `delta`.
    ///
    /// Returns the actions whose timers finished, in scheduling order.
    pub fn tick(&mut self, delta: Duration) -> Vec<A> {
        let mut fired = Vec::new();
        self.pending.retain_mut(|(timer, action)| {
            timer.tick(delta);
            if timer.is_finished() {
                fired.push(*action);
                false
            } else {
                true
            }
        });
        fired
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// A scheduled action came due on `owner`.
#[derive(Message, Debug, Clone, Copy)]
pub struct TimerElapsed<A: TimerAction> {
    pub owner: Entity,
    pub action: A,
}

pub fn tick_one_shot_timers<A: TimerAction>(
    time: Res<Time>,
    mut q: Query<(Entity, &mut OneShotTimers<A>)>,
    mut writer: MessageWriter<TimerElapsed<A>>,
) {
    let dt = time.delta();
    for (owner, mut timers) in &mut q {
        // Skip the mutable deref (and change detection) for idle owners.
        if timers.is_empty() {
            continue;
        }
        for action in timers.tick(dt) {
            writer.write(TimerElapsed { owner, action });
        }
    }
}

/// Register the message and ticking system for one action type.
pub fn plugin<A: TimerAction>(app: &mut App) {
    app.add_message::<TimerElapsed<A>>().add_systems(
        Update,
        tick_one_shot_timers::<A>.in_set(GameplaySystems::Timers),
    );
}
