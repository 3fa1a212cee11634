//! World-space position component.
//!
//! [`MapPosition`] stores the pivot of an entity in play-area coordinates.
//! X grows to the right and Y grows downwards (screen convention), so the
//! player ship sits near the bottom edge and flies "up" towards lower Y.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }
}
