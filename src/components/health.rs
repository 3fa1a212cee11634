//! Hit points with a clamping invariant.
//!
//! `current` always lies in `[-1, max]`. Every write goes through
//! [`Health::set`], so out-of-range values are silently pulled back to the
//! nearest valid value instead of being rejected.

use bevy_ecs::prelude::Component;

/// Lowest value health can reach.
pub const MIN_HEALTH: i32 = -1;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Full health. A non-positive `max` is raised to 1.
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn set(&mut self, value: i32) {
        self.current = value.clamp(MIN_HEALTH, self.max);
    }

    /// Change the maximum, re-clamping the current value.
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(1);
        self.set(self.current);
    }

    /// Subtract `amount`. Negative amounts are ignored so damage never heals.
    pub fn damage(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.set(self.current.saturating_sub(amount));
    }

    pub fn heal(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.set(self.current.saturating_add(amount));
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}
