//! Per-frame keyboard state.
//!
//! The simulation polls this once per frame. It is level-triggered: a held
//! key reads `true` on every frame it is held, and nothing is buffered.
//! Whatever drives the simulation (window backend, headless runner, tests)
//! overwrites it before each step.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Fire the weapon.
    pub space: bool,
    /// Trigger the ability.
    pub shift: bool,
    /// Quit.
    pub escape: bool,
}

impl InputState {
    pub fn idle() -> Self {
        Self::default()
    }
}
