//! Per-ship control intent.
//!
//! Systems never read the keyboard directly when flying a ship. The
//! [`pilot_controls`](crate::systems::pilot::pilot_controls) system resolves
//! each ship's [`ControlSource`] into [`ShipControls`] once per frame, and the
//! spaceship update only looks at those flags.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlSource {
    /// Follows the shared [`InputState`](crate::resources::input::InputState).
    #[default]
    Keyboard,
    /// Computer pilot hunting the nearest opposing ship.
    Autopilot,
}

/// Level-triggered control flags for this frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShipControls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub ability: bool,
}

impl ShipControls {
    /// Horizontal steering axis: -1 left, +1 right, 0 when both or neither.
    pub fn steer_axis(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
