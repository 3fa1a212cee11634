//! Parent/child spatial attachment.
//!
//! A child carries [`AttachedTo`] with the parent's [`Entity`] handle and a
//! fixed offset captured when the link was made. The parent lists its
//! children, in attachment order, in [`Attachments`]. Links are plain entity
//! handles, so a despawned parent never leaves a dangling reference: lookups
//! simply fail and the sweep kills orphaned children.
//!
//! Invariant: after any sync, `child.pos == parent.pos + offset`.
//!
//! # Related
//!
//! - [`crate::entity::add_child`] – establishes the link
//! - [`crate::systems::attachment::sync_attachments`] – per-frame resync

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct AttachedTo {
    /// The entity to follow.
    pub parent: Entity,
    /// Offset from the parent's position.
    pub offset: Vec2,
}

impl AttachedTo {
    pub fn new(parent: Entity, offset: Vec2) -> Self {
        Self { parent, offset }
    }
}

/// Ordered children of an entity.
#[derive(Debug, Clone, Default, Component)]
pub struct Attachments(pub SmallVec<[Entity; 4]>);

impl Attachments {
    pub fn push(&mut self, child: Entity) {
        if !self.0.contains(&child) {
            self.0.push(child);
        }
    }

    pub fn remove(&mut self, child: Entity) {
        self.0.retain(|e| *e != child);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
