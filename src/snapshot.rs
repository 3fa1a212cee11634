//! Draw-ordered view of a frame for the renderer.
//!
//! The renderer never touches the ECS world. Once per frame it receives a
//! [`FrameSnapshot`]: objects in registry (draw) order, then effects, plus
//! the HUD numbers. Everything is `Serialize` so the headless runner can dump
//! it as JSON.

use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::spaceship::Spaceship;
use crate::components::sprite::Sprite;
use crate::resources::registry::{EndGame, WorldRegistry};
use crate::resources::worldtime::WorldTime;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawItem {
    pub entity: u64,
    pub x: f32,
    pub y: f32,
    /// Sprite rotation in degrees, 0 pointing up.
    pub angle: f32,
    pub sprite: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hud {
    pub player_health: i32,
    pub player_max_health: i32,
    pub boss_health: i32,
    pub boss_max_health: i32,
    /// Frames left on the player's active ability.
    pub ability_frames: u32,
    /// Frames left on the player's cooldown.
    pub cooldown_frames: u32,
    pub ability_message: String,
    pub end_game: EndGame,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub objects: Vec<DrawItem>,
    pub effects: Vec<DrawItem>,
    pub hud: Hud,
}

fn draw_item(world: &World, entity: Entity) -> Option<DrawItem> {
    let pos = world.get::<MapPosition>(entity)?.pos;
    let sprite = world.get::<Sprite>(entity)?;
    let angle = world.get::<Rotation>(entity).map(|r| r.degrees).unwrap_or(0.0);
    Some(DrawItem {
        entity: entity.to_bits(),
        x: pos.x,
        y: pos.y,
        angle,
        sprite: sprite.key.clone(),
    })
}

fn health_of(world: &World, entity: Option<Entity>) -> (i32, i32) {
    entity
        .and_then(|e| world.get::<Health>(e))
        .map(|h| (h.current(), h.max()))
        .unwrap_or((0, 0))
}

pub fn take_snapshot(world: &World) -> FrameSnapshot {
    let frame = world
        .get_resource::<WorldTime>()
        .map(|t| t.frame_count)
        .unwrap_or(0);
    let Some(registry) = world.get_resource::<WorldRegistry>() else {
        return FrameSnapshot {
            frame,
            objects: Vec::new(),
            effects: Vec::new(),
            hud: Hud::default(),
        };
    };

    let objects = registry
        .objects
        .iter()
        .filter_map(|e| draw_item(world, *e))
        .collect();
    let effects = registry
        .effects
        .iter()
        .filter_map(|e| draw_item(world, *e))
        .collect();

    let (player_health, player_max_health) = health_of(world, registry.player);
    let (boss_health, boss_max_health) = health_of(world, registry.boss);
    let player_ship = registry.player.and_then(|e| world.get::<Spaceship>(e));
    let hud = Hud {
        player_health,
        player_max_health,
        boss_health,
        boss_max_health,
        ability_frames: player_ship.map(|s| s.ability_timer).unwrap_or(0),
        cooldown_frames: player_ship.map(|s| s.cooldown_timer).unwrap_or(0),
        ability_message: player_ship
            .map(|s| s.ability.message.to_string())
            .unwrap_or_default(),
        end_game: registry.end_game,
    };

    FrameSnapshot {
        frame,
        objects,
        effects,
        hud,
    }
}
