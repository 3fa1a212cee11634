//! Lifecycle flags shared by every simulated object.
//!
//! Killing an entity only clears `alive`; the entity stays in the ECS world
//! until the end-of-frame [`sweep_dead`](crate::systems::sweep::sweep_dead)
//! removes it, so systems running later in the same frame still see a
//! consistent (if dead) entity.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub alive: bool,
    pub collidable: bool,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            alive: true,
            collidable: true,
        }
    }
}

impl Status {
    /// A living entity that never takes part in collisions.
    pub fn intangible() -> Self {
        Self {
            alive: true,
            collidable: false,
        }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Whether the collision detector should consider this entity.
    pub fn can_collide(&self) -> bool {
        self.alive && self.collidable
    }
}
