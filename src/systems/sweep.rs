//! End-of-frame sweep of dead objects.
//!
//! Killing only flips a flag; this is the single place where objects leave
//! the world. In order, the sweep:
//!
//! 1. Kills the newest living objects beyond the registry's object cap
//! 2. Kills children whose parent is dead or gone, down the whole chain
//! 3. For every dead object in registry order: records a designated ship's
//!    death as the game outcome, cancels its pending callbacks, unlinks it
//!    from its parent and despawns it

use bevy_ecs::prelude::*;
use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::components::attachment::{AttachedTo, Attachments};
use crate::entity::{is_alive, kill};
use crate::resources::registry::WorldRegistry;
use crate::resources::scheduler::Scheduler;

pub fn sweep_dead(world: &mut World) {
    enforce_object_cap(world);
    kill_orphans(world);

    let objects = world.resource::<WorldRegistry>().objects.clone();
    let dead: Vec<Entity> = objects
        .into_iter()
        .filter(|e| !is_alive(world, *e))
        .collect();
    if dead.is_empty() {
        return;
    }
    let swept: FxHashSet<Entity> = dead.iter().copied().collect();

    for entity in dead.iter().copied() {
        world.resource_mut::<WorldRegistry>().note_death(entity);
        if let Some(mut scheduler) = world.get_resource_mut::<Scheduler>() {
            scheduler.cancel_owner(entity);
        }
        if let Some(link) = world.get::<AttachedTo>(entity).copied() {
            if let Some(mut siblings) = world.get_mut::<Attachments>(link.parent) {
                siblings.remove(entity);
            }
        }
        if let Ok(entity_mut) = world.get_entity_mut(entity) {
            entity_mut.despawn();
        }
    }

    let mut registry = world.resource_mut::<WorldRegistry>();
    registry.objects.retain(|e| !swept.contains(e));
    debug!(
        "Swept {} dead objects, {} remain",
        dead.len(),
        registry.objects.len()
    );
}

fn enforce_object_cap(world: &mut World) {
    let (objects, limit) = {
        let registry = world.resource::<WorldRegistry>();
        (registry.objects.clone(), registry.object_limit)
    };
    let living: Vec<Entity> = objects
        .into_iter()
        .filter(|e| is_alive(world, *e))
        .collect();
    if living.len() <= limit {
        return;
    }
    let excess = &living[limit..];
    warn!(
        "Object cap of {} exceeded, dropping {} newest objects",
        limit,
        excess.len()
    );
    for entity in excess.iter().copied() {
        kill(world, entity);
    }
}

fn kill_orphans(world: &mut World) {
    loop {
        let orphans: Vec<Entity> = world
            .query::<(Entity, &AttachedTo)>()
            .iter(world)
            .filter(|(child, link)| is_alive(world, *child) && !is_alive(world, link.parent))
            .map(|(child, _)| child)
            .collect();
        if orphans.is_empty() {
            break;
        }
        for child in orphans {
            kill(world, child);
        }
    }
}
