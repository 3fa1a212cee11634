//! Directional motion component.
//!
//! [`Motion`] stores a scalar `speed` (world units per frame) and a
//! `direction` in degrees. The direction uses the trigonometric convention
//! (0° = +X, 90° = +Y which is *down* on screen), which is the facing angle
//! offset by -90°. A projectile fired by a ship facing up (0°) therefore
//! carries `direction = -90` and moves towards lower Y.
//!
//! Each frame the [`movement`](crate::systems::movement::movement) system
//! advances the position by `(speed * cos(direction), speed * sin(direction))`.

use std::str::FromStr;

use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::rotation::normalize_degrees;

/// Offset between the facing convention and the stored direction.
pub const FACING_TO_DIRECTION: f32 = -90.0;

/// Surface a moving entity can bounce off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// A floor or ceiling: the vertical component flips.
    Horizontal,
    /// A wall: the horizontal component flips.
    Vertical,
    /// Head-on reflection: the direction reverses.
    Reverse,
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Surface::Horizontal),
            "vertical" => Ok(Surface::Vertical),
            "reverse" => Ok(Surface::Reverse),
            other => Err(format!("unknown bounce surface '{}'", other)),
        }
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Motion {
    /// Distance travelled per frame.
    pub speed: f32,
    /// Travel direction in degrees (facing - 90).
    pub direction: f32,
}

impl Motion {
    /// Build a motion heading the way a sprite facing `facing_degrees` points.
    pub fn facing(speed: f32, facing_degrees: f32) -> Self {
        Self {
            speed,
            direction: normalize_degrees(facing_degrees + FACING_TO_DIRECTION),
        }
    }

    /// A motion that never moves on its own (ships are steered by their pilot).
    pub fn stationary(speed: f32) -> Self {
        Self::facing(speed, 0.0)
    }

    /// Facing angle equivalent of the stored direction.
    pub fn facing_degrees(&self) -> f32 {
        normalize_degrees(self.direction - FACING_TO_DIRECTION)
    }

    pub fn set_facing(&mut self, facing_degrees: f32) {
        self.direction = normalize_degrees(facing_degrees + FACING_TO_DIRECTION);
    }

    /// Displacement for one frame.
    pub fn step(&self) -> Vec2 {
        let radians = self.direction.to_radians();
        Vec2::new(self.speed * radians.cos(), self.speed * radians.sin())
    }

    /// Reflect the direction off a surface.
    pub fn bounce(&mut self, surface: Surface) {
        self.direction = match surface {
            Surface::Horizontal => normalize_degrees(-self.direction),
            Surface::Vertical => normalize_degrees(180.0 - self.direction),
            Surface::Reverse => normalize_degrees(self.direction + 180.0),
        };
    }
}
