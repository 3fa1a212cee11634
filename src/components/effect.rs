use bevy_ecs::prelude::Component;

/// Transient visual effect (explosions). Not simulated, not collidable;
/// tracked in the registry's effect list and removed when `frames_left`
/// runs out.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub frames_left: u32,
}

impl Effect {
    pub fn new(frames: u32) -> Self {
        Self {
            frames_left: frames.max(1),
        }
    }

    /// Advance one frame. Returns true once the effect has expired.
    pub fn tick(&mut self) -> bool {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.frames_left == 0
    }
}
