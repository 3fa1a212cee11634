//! Registry of live simulated objects and the game outcome.
//!
//! `objects` keeps insertion order, which is also the draw order handed to
//! the renderer. Transient visual effects live in their own list so they
//! never take part in collisions or count against the object cap.

use bevy_ecs::prelude::{Entity, Resource};
use log::info;
use serde::Serialize;

pub const DEFAULT_OBJECT_LIMIT: usize = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum EndGame {
    #[default]
    Playing,
    Win,
    Loss,
}

impl EndGame {
    pub fn is_over(&self) -> bool {
        *self != EndGame::Playing
    }
}

#[derive(Resource, Debug, Clone)]
pub struct WorldRegistry {
    pub objects: Vec<Entity>,
    pub effects: Vec<Entity>,
    pub end_game: EndGame,
    /// Ship whose death loses the game.
    pub player: Option<Entity>,
    /// Ship whose death wins the game.
    pub boss: Option<Entity>,
    pub object_limit: usize,
}

impl Default for WorldRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_OBJECT_LIMIT)
    }
}

impl WorldRegistry {
    pub fn new(object_limit: usize) -> Self {
        Self {
            objects: Vec::new(),
            effects: Vec::new(),
            end_game: EndGame::Playing,
            player: None,
            boss: None,
            object_limit: object_limit.max(1),
        }
    }

    pub fn add_object(&mut self, entity: Entity) {
        if !self.objects.contains(&entity) {
            self.objects.push(entity);
        }
    }

    pub fn remove_object(&mut self, entity: Entity) -> bool {
        let before = self.objects.len();
        self.objects.retain(|e| *e != entity);
        self.objects.len() != before
    }

    pub fn add_effect(&mut self, entity: Entity) {
        if !self.effects.contains(&entity) {
            self.effects.push(entity);
        }
    }

    pub fn remove_effect(&mut self, entity: Entity) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| *e != entity);
        self.effects.len() != before
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.objects.contains(&entity)
    }

    /// Record the death of `entity`. The first designated ship to die decides
    /// the outcome; later deaths do not change it.
    pub fn note_death(&mut self, entity: Entity) {
        if self.end_game.is_over() {
            return;
        }
        if self.player == Some(entity) {
            self.end_game = EndGame::Loss;
            info!("Player ship destroyed: game lost");
        } else if self.boss == Some(entity) {
            self.end_game = EndGame::Win;
            info!("Boss ship destroyed: game won");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    #[test]
    fn objects_keep_insertion_order_without_duplicates() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut registry = WorldRegistry::default();
        registry.add_object(b);
        registry.add_object(a);
        registry.add_object(b);
        assert_eq!(registry.objects, vec![b, a]);
        assert!(registry.remove_object(b));
        assert!(!registry.remove_object(b));
        assert_eq!(registry.objects, vec![a]);
    }

    #[test]
    fn first_designated_death_decides() {
        let mut world = World::new();
        let player = world.spawn_empty().id();
        let boss = world.spawn_empty().id();
        let other = world.spawn_empty().id();
        let mut registry = WorldRegistry::default();
        registry.player = Some(player);
        registry.boss = Some(boss);

        registry.note_death(other);
        assert_eq!(registry.end_game, EndGame::Playing);
        registry.note_death(boss);
        assert_eq!(registry.end_game, EndGame::Win);
        registry.note_death(player);
        assert_eq!(registry.end_game, EndGame::Win);
    }
}
