//! World-level operations on simulated objects.
//!
//! These take `&mut World` so they can be called from systems through
//! `commands.queue`, from scheduler callbacks and from ability effects alike.
//! Missing entities are skipped silently: a handle that no longer resolves
//! belongs to something already swept.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, trace};

use crate::components::attachment::{AttachedTo, Attachments};
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::status::Status;

/// Whether `entity` exists and has not been killed.
pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<Status>(entity)
        .map(|status| status.alive)
        .unwrap_or(false)
}

/// Flag `entity` as dead. Removal happens at the end-of-frame sweep.
pub fn kill(world: &mut World, entity: Entity) {
    if let Some(mut status) = world.get_mut::<Status>(entity) {
        if status.alive {
            trace!("Killing {:?}", entity);
        }
        status.kill();
    }
}

/// Apply `amount` points of damage. Kills the entity once health is depleted.
pub fn damage(world: &mut World, entity: Entity, amount: i32) {
    let depleted = match world.get_mut::<Health>(entity) {
        Some(mut health) => {
            health.damage(amount);
            health.is_depleted()
        }
        None => return,
    };
    if depleted {
        kill(world, entity);
    }
}

/// Attach `child` to `parent`, keeping the child where it is.
///
/// The offset is captured from the current positions. A child already
/// attached elsewhere is moved over. Returns `false` (and changes nothing)
/// when either entity lacks a position or the link would form a cycle.
pub fn add_child(world: &mut World, parent: Entity, child: Entity) -> bool {
    if parent == child || is_ancestor(world, child, parent) {
        return false;
    }
    let (Some(parent_pos), Some(child_pos)) = (
        world.get::<MapPosition>(parent).map(|p| p.pos),
        world.get::<MapPosition>(child).map(|p| p.pos),
    ) else {
        return false;
    };

    detach(world, child);

    let offset = child_pos - parent_pos;
    world.entity_mut(child).insert(AttachedTo::new(parent, offset));
    match world.get_mut::<Attachments>(parent) {
        Some(mut children) => children.push(child),
        None => {
            let mut children = Attachments::default();
            children.push(child);
            world.entity_mut(parent).insert(children);
        }
    }
    debug!("Attached {:?} to {:?} at offset {:?}", child, parent, offset);
    true
}

/// Break the link between `child` and its parent, if any.
pub fn detach(world: &mut World, child: Entity) {
    let Some(link) = world.get::<AttachedTo>(child).copied() else {
        return;
    };
    if let Some(mut children) = world.get_mut::<Attachments>(link.parent) {
        children.remove(child);
    }
    world.entity_mut(child).remove::<AttachedTo>();
}

/// Whether `ancestor` appears on the parent chain of `entity`.
pub fn is_ancestor(world: &World, ancestor: Entity, entity: Entity) -> bool {
    let mut current = entity;
    while let Some(link) = world.get::<AttachedTo>(current) {
        if link.parent == ancestor {
            return true;
        }
        current = link.parent;
    }
    false
}

/// Move `entity` by `delta` and bring its descendants along in the same call.
pub fn move_entity(world: &mut World, entity: Entity, delta: Vec2) {
    let Some(mut position) = world.get_mut::<MapPosition>(entity) else {
        return;
    };
    position.translate(delta);
    sync_children(world, entity);
}

/// Place `entity` at `pos` and bring its descendants along.
pub fn set_position(world: &mut World, entity: Entity, pos: Vec2) {
    let Some(mut position) = world.get_mut::<MapPosition>(entity) else {
        return;
    };
    position.pos = pos;
    sync_children(world, entity);
}

/// Recompute the positions of every descendant of `parent` from their offsets.
pub fn sync_children(world: &mut World, parent: Entity) {
    let mut stack = vec![parent];
    while let Some(current) = stack.pop() {
        let Some(current_pos) = world.get::<MapPosition>(current).map(|p| p.pos) else {
            continue;
        };
        let children: Vec<Entity> = match world.get::<Attachments>(current) {
            Some(children) => children.iter().copied().collect(),
            None => continue,
        };
        for child in children {
            let Some(offset) = world.get::<AttachedTo>(child).map(|link| link.offset) else {
                continue;
            };
            if let Some(mut position) = world.get_mut::<MapPosition>(child) {
                position.pos = current_pos + offset;
                stack.push(child);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positioned(world: &mut World, x: f32, y: f32) -> Entity {
        world
            .spawn((MapPosition::new(x, y), Status::default(), Health::new(10)))
            .id()
    }

    #[test]
    fn damage_kills_on_depletion() {
        let mut world = World::new();
        let e = positioned(&mut world, 0.0, 0.0);
        damage(&mut world, e, 6);
        assert!(is_alive(&world, e));
        damage(&mut world, e, 4);
        assert!(!is_alive(&world, e));
        assert_eq!(world.get::<Health>(e).unwrap().current(), 0);
    }

    #[test]
    fn missing_entities_read_as_dead() {
        let mut world = World::new();
        let e = positioned(&mut world, 0.0, 0.0);
        world.despawn(e);
        assert!(!is_alive(&world, e));
        kill(&mut world, e);
        damage(&mut world, e, 3);
    }

    #[test]
    fn child_follows_parent_moves() {
        let mut world = World::new();
        let parent = positioned(&mut world, 100.0, 100.0);
        let child = positioned(&mut world, 100.0, 40.0);
        assert!(add_child(&mut world, parent, child));

        move_entity(&mut world, parent, Vec2::new(15.0, -3.0));
        set_position(&mut world, parent, Vec2::new(7.0, 9.0));
        move_entity(&mut world, parent, Vec2::new(1.0, 1.0));

        let parent_pos = world.get::<MapPosition>(parent).unwrap().pos;
        let child_pos = world.get::<MapPosition>(child).unwrap().pos;
        assert_eq!(child_pos, parent_pos + Vec2::new(0.0, -60.0));
    }

    #[test]
    fn grandchildren_follow_too() {
        let mut world = World::new();
        let root = positioned(&mut world, 0.0, 0.0);
        let middle = positioned(&mut world, 10.0, 0.0);
        let leaf = positioned(&mut world, 10.0, 10.0);
        assert!(add_child(&mut world, root, middle));
        assert!(add_child(&mut world, middle, leaf));

        move_entity(&mut world, root, Vec2::new(5.0, 5.0));
        assert_eq!(
            world.get::<MapPosition>(leaf).unwrap().pos,
            Vec2::new(15.0, 15.0)
        );
    }

    #[test]
    fn cycles_are_refused() {
        let mut world = World::new();
        let a = positioned(&mut world, 0.0, 0.0);
        let b = positioned(&mut world, 1.0, 0.0);
        assert!(add_child(&mut world, a, b));
        assert!(!add_child(&mut world, b, a));
        assert!(!add_child(&mut world, a, a));
        assert!(world.get::<AttachedTo>(a).is_none());
    }

    #[test]
    fn reattaching_moves_the_child() {
        let mut world = World::new();
        let first = positioned(&mut world, 0.0, 0.0);
        let second = positioned(&mut world, 50.0, 0.0);
        let child = positioned(&mut world, 10.0, 0.0);
        assert!(add_child(&mut world, first, child));
        assert!(add_child(&mut world, second, child));

        assert!(world.get::<Attachments>(first).unwrap().is_empty());
        assert_eq!(world.get::<Attachments>(second).unwrap().len(), 1);
        assert_eq!(
            world.get::<AttachedTo>(child).unwrap().offset,
            Vec2::new(-40.0, 0.0)
        );
    }
}
