//! Time-to-live for short-lived entities.
//!
//! Unlike a per-frame countdown, a finite [`Lifespan`] is turned into a
//! [`Scheduler`](crate::resources::scheduler::Scheduler) entry keyed by
//! `(entity, Purpose::Expire)` when the entity is spawned. When the entry
//! fires the entity is killed and the next sweep removes it.
//!
//! # Related
//!
//! - [`crate::spawn`] – constructors that register the expiry callback
//! - [`crate::systems::scheduler::fire_scheduled_callbacks`] – fires it

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub enum Lifespan {
    #[default]
    Infinite,
    /// Seconds of simulated time before the entity is killed.
    Seconds(f32),
}

impl Lifespan {
    /// Non-positive durations mean "lives forever".
    pub fn from_seconds(seconds: f32) -> Self {
        if seconds > 0.0 && seconds.is_finite() {
            Lifespan::Seconds(seconds)
        } else {
            Lifespan::Infinite
        }
    }

    pub fn seconds(&self) -> Option<f32> {
        match self {
            Lifespan::Infinite => None,
            Lifespan::Seconds(s) => Some(*s),
        }
    }
}
