//! Bounded play field.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
    /// How far past an edge an object may drift before it is killed.
    pub margin: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            margin: 50.0,
        }
    }
}

impl PlayArea {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            margin: margin.max(0.0),
        }
    }

    pub fn contains_with_margin(&self, pos: Vec2) -> bool {
        pos.x >= -self.margin
            && pos.x <= self.width + self.margin
            && pos.y >= -self.margin
            && pos.y <= self.height + self.margin
    }

    /// Clamp a position onto the visible field.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.max(Vec2::ZERO).min(Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_extends_bounds() {
        let area = PlayArea::new(100.0, 100.0, 10.0);
        assert!(area.contains_with_margin(Vec2::new(-10.0, 50.0)));
        assert!(area.contains_with_margin(Vec2::new(110.0, 110.0)));
        assert!(!area.contains_with_margin(Vec2::new(-10.5, 50.0)));
        assert!(!area.contains_with_margin(Vec2::new(50.0, 111.0)));
    }

    #[test]
    fn clamp_keeps_inside() {
        let area = PlayArea::new(100.0, 80.0, 10.0);
        assert_eq!(area.clamp(Vec2::new(-5.0, 90.0)), Vec2::new(0.0, 80.0));
        assert_eq!(area.clamp(Vec2::new(40.0, 40.0)), Vec2::new(40.0, 40.0));
    }
}
