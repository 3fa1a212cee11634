//! Transient visual effects.
//!
//! Counts every [`Effect`] down by one frame and removes expired ones from
//! the registry and the world.
use bevy_ecs::prelude::*;

use crate::components::effect::Effect;
use crate::resources::registry::WorldRegistry;

pub fn effects_update(
    mut effects: Query<(Entity, &mut Effect)>,
    mut registry: ResMut<WorldRegistry>,
    mut commands: Commands,
) {
    for (entity, mut effect) in effects.iter_mut() {
        if effect.tick() {
            registry.remove_effect(entity);
            commands.entity(entity).try_despawn();
        }
    }
}
