//! Environment spawner.
//!
//! Rolls once per frame for a new asteroid and a new powerup entering from
//! above the top edge. Rates are per second and converted to per-frame
//! probabilities. Nothing spawns once the game has an outcome.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::hazard::PowerupEffect;
use crate::resources::gameconfig::GameConfig;
use crate::resources::playarea::PlayArea;
use crate::resources::registry::WorldRegistry;
use crate::resources::rng::GameRng;
use crate::resources::worldtime::WorldTime;
use crate::spawn::{ASTEROID_SIZE, spawn_asteroid, spawn_powerup};

const ASTEROID_SPEED: (f32, f32) = (1.5, 4.0);
/// Asteroids fall roughly downwards, within this facing range.
const ASTEROID_FACING: (f32, f32) = (160.0, 200.0);
const ASTEROID_SPIN: (f32, f32) = (-3.0, 3.0);
const REPAIR_AMOUNT: i32 = 10;
const RAPIDFIRE_BONUS: f32 = 2.0;

pub fn environment_spawner(
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    area: Res<PlayArea>,
    registry: Res<WorldRegistry>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    if registry.end_game.is_over() {
        return;
    }
    let fps = time.fps as f32;
    let entry_y = -ASTEROID_SIZE * 0.5;

    if rng.chance(config.asteroids_per_second / fps) {
        let pos = Vec2::new(rng.range(0.0, area.width), entry_y);
        let speed = rng.range(ASTEROID_SPEED.0, ASTEROID_SPEED.1);
        let facing = rng.range(ASTEROID_FACING.0, ASTEROID_FACING.1);
        let spin = rng.range(ASTEROID_SPIN.0, ASTEROID_SPIN.1);
        commands.queue(move |world: &mut World| {
            spawn_asteroid(world, pos, speed, facing, spin);
        });
    }

    if rng.chance(config.powerups_per_second / fps) {
        let pos = Vec2::new(rng.range(0.0, area.width), entry_y);
        let effect = match rng.0.usize(0..3) {
            0 => PowerupEffect::Repair(REPAIR_AMOUNT),
            1 => PowerupEffect::Rapidfire(RAPIDFIRE_BONUS),
            _ => PowerupEffect::ExtraBarrel,
        };
        commands.queue(move |world: &mut World| {
            spawn_powerup(world, pos, effect);
        });
    }
}
