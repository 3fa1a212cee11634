//! Collision event types.
//!
//! The [`collision_detector`](crate::systems::collision::collision_detector)
//! takes a [`CollisionInfo`] snapshot of every collidable, living object
//! before any handler runs, then triggers one [`CollisionEvent`] per side of
//! each overlapping pair. Handlers only ever mutate `entity` and read the
//! snapshot of `other`, so the outcome does not depend on which side of a
//! pair is told first.
use bevy_ecs::prelude::*;

use crate::components::hazard::PowerupEffect;
use crate::components::team::{EntityKind, Team};

/// What one side of a collision knows about the other, frozen at detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    pub entity: Entity,
    pub kind: EntityKind,
    pub team: Team,
    /// Damage dealt on contact (projectiles and asteroids), 0 otherwise.
    pub damage: i32,
    /// Firing ship for projectiles, deploying ship for reflectors.
    pub source: Option<Entity>,
    pub powerup: Option<PowerupEffect>,
}

/// `entity` touched `other` this frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub entity: Entity,
    pub other: CollisionInfo,
}
