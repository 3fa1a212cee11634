//! Spaceship ability/cooldown state machine and baseline snapshot.
//!
//! ```text
//!  Idle (actions = 1) --trigger--> Active (actions = 0, effect applied once)
//!     ^                               |
//!     |                         ability timer ends: baseline restored
//!     |                               v
//!     +------ cooldown ends ------ Cooldown (actions still 0)
//! ```
//!
//! The frame counters in [`Spaceship`] drive the HUD bars. The transitions
//! themselves are carried by scheduler callbacks keyed per ship and purpose
//! (`AbilityReset`, `ReplenishActions`); see
//! [`crate::systems::spaceship`].

use bevy_ecs::prelude::Component;

use crate::components::ability::{Ability, clamp_ability_duration};
use crate::components::weapon::WeaponStats;
use crate::resources::worldtime::seconds_to_frames;

pub const MIN_COOLDOWN: f32 = 1.0;
pub const MAX_COOLDOWN: f32 = 12.0;

pub fn clamp_cooldown(seconds: f32) -> f32 {
    if seconds.is_nan() {
        return MIN_COOLDOWN;
    }
    seconds.clamp(MIN_COOLDOWN, MAX_COOLDOWN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbilityPhase {
    #[default]
    Idle,
    Active,
    Cooldown,
}

#[derive(Component, Debug, Clone)]
pub struct Spaceship {
    pub ability: Ability,
    ability_duration: f32,
    cooldown: f32,
    /// Action points; one point buys one ability activation.
    pub actions: u8,
    pub phase: AbilityPhase,
    /// Frames left until the active ability wears off.
    pub ability_timer: u32,
    /// Frames left until the action point comes back.
    pub cooldown_timer: u32,
}

impl Spaceship {
    pub fn new(ability: Ability, ability_duration: f32, cooldown: f32) -> Self {
        let ability_duration = ability.duration.unwrap_or(ability_duration);
        Self {
            ability,
            ability_duration: clamp_ability_duration(ability_duration),
            cooldown: clamp_cooldown(cooldown),
            actions: 1,
            phase: AbilityPhase::Idle,
            ability_timer: 0,
            cooldown_timer: 0,
        }
    }

    pub fn ability_duration(&self) -> f32 {
        self.ability_duration
    }

    pub fn set_ability_duration(&mut self, seconds: f32) {
        self.ability_duration = clamp_ability_duration(seconds);
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn set_cooldown(&mut self, seconds: f32) {
        self.cooldown = clamp_cooldown(seconds);
    }

    pub fn can_activate(&self) -> bool {
        self.actions >= 1 && self.phase == AbilityPhase::Idle
    }

    /// Spend the action point and enter `Active`. Returns the duration in seconds.
    pub fn begin_ability(&mut self, fps: u32) -> f32 {
        self.actions = 0;
        self.phase = AbilityPhase::Active;
        self.ability_timer = seconds_to_frames(self.ability_duration, fps);
        self.ability_duration
    }

    /// Leave `Active` for `Cooldown`. Returns the cooldown in seconds.
    pub fn begin_cooldown(&mut self, fps: u32) -> f32 {
        self.phase = AbilityPhase::Cooldown;
        self.ability_timer = 0;
        self.cooldown_timer = seconds_to_frames(self.cooldown, fps);
        self.cooldown
    }

    pub fn replenish(&mut self, actions: u8) {
        self.phase = AbilityPhase::Idle;
        self.cooldown_timer = 0;
        self.actions = actions;
    }

    pub fn tick_timers(&mut self) {
        self.ability_timer = self.ability_timer.saturating_sub(1);
        self.cooldown_timer = self.cooldown_timer.saturating_sub(1);
    }
}

/// Immutable snapshot of a ship's tunable stats, taken once at spawn.
///
/// Every ability reset restores these values, never the pre-ability ones,
/// so stacking buffs cannot ratchet a stat upwards.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ShipBaseline {
    pub speed: f32,
    pub weapon: WeaponStats,
    pub sprite: String,
    pub actions: u8,
    pub collidable: bool,
    pub max_health: i32,
    pub ability_duration: f32,
    pub cooldown: f32,
}
