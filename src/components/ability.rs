//! Ship abilities.
//!
//! An [`Ability`] is a named, one-shot effect applied to its ship when the
//! pilot triggers it. Effects are plain functions that mutate the ship's
//! tunable stats or spawn helper entities; they run with full world access
//! through a queued command. The ship's baseline snapshot undoes stat changes
//! when the ability wears off.
//!
//! The catalog of concrete abilities lives in [`crate::abilities`].

use bevy_ecs::prelude::{Entity, World};

/// Applies an ability to `ship`.
pub type AbilityEffect = fn(world: &mut World, ship: Entity);

pub const MIN_ABILITY_DURATION: f32 = 1.0;
pub const MAX_ABILITY_DURATION: f32 = 10.0;

pub fn clamp_ability_duration(seconds: f32) -> f32 {
    if seconds.is_nan() {
        return MIN_ABILITY_DURATION;
    }
    seconds.clamp(MIN_ABILITY_DURATION, MAX_ABILITY_DURATION)
}

#[derive(Clone, Copy)]
pub struct Ability {
    pub name: &'static str,
    /// Short text shown when the ability fires.
    pub message: &'static str,
    pub effect: AbilityEffect,
    /// Duration the ability declares for itself, overriding the ship's.
    pub duration: Option<f32>,
}

impl Ability {
    pub fn new(name: &'static str, message: &'static str, effect: AbilityEffect) -> Self {
        Self {
            name,
            message,
            effect,
            duration: None,
        }
    }

    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = Some(clamp_ability_duration(seconds));
        self
    }

    /// An ability that changes nothing.
    pub fn none() -> Self {
        Self::new("none", "", |_, _| {})
    }

    pub fn apply(&self, world: &mut World, ship: Entity) {
        (self.effect)(world, ship);
    }
}

impl std::fmt::Debug for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ability")
            .field("name", &self.name)
            .field("duration", &self.duration)
            .finish()
    }
}
