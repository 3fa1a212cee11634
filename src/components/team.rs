//! Faction and kind tags.
//!
//! Only entities on different [`Team`]s are tested against each other by the
//! collision detector. [`EntityKind`] selects the collision rules applied by
//! the collision observer.

use bevy_ecs::prelude::Component;
use serde::Serialize;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Team {
    #[default]
    Neutral,
    Player,
    Enemy,
}

impl Team {
    /// Default facing for ships and their shots: players fly up, enemies down.
    pub fn facing_degrees(&self) -> f32 {
        match self {
            Team::Enemy => 180.0,
            Team::Player | Team::Neutral => 0.0,
        }
    }

    /// Vertical sign of "forward" on screen (-1 up, +1 down).
    pub fn forward_sign(&self) -> f32 {
        match self {
            Team::Enemy => 1.0,
            Team::Player | Team::Neutral => -1.0,
        }
    }

    pub fn opposes(&self, other: Team) -> bool {
        *self != other
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Spaceship,
    Projectile,
    Asteroid,
    Powerup,
    Reflector,
}
