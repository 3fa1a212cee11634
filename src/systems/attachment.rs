//! Attachment sync system.
//!
//! Re-places every attached child at `parent.pos + offset`, walking down from
//! each root so chains of attachments settle in one pass. Runs after all
//! movers of the frame.
//!
//! # Related
//!
//! - [`AttachedTo`] – the child side of the link
//! - [`crate::entity::add_child`] – establishes the link

use bevy_ecs::prelude::*;

use crate::components::attachment::{AttachedTo, Attachments};
use crate::entity::sync_children;

pub fn sync_attachments(world: &mut World) {
    let roots: Vec<Entity> = world
        .query_filtered::<Entity, (With<Attachments>, Without<AttachedTo>)>()
        .iter(world)
        .collect();
    for root in roots {
        sync_children(world, root);
    }
}
