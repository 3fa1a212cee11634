//! Spaceship update and the ability/cooldown transitions.
//!
//! [`spaceship_update`] runs once per frame for every living ship:
//!
//! 1. Ticks the HUD frame counters
//! 2. Steers left/right by the ship's speed and clamps it onto the field
//! 3. Queues [`activate_ability`] when the pilot asks and an action point is
//!    available
//! 4. Queues [`fire_weapon`] while the trigger is held and the weapon is ready
//!
//! Transitions out of `Active` and `Cooldown` are scheduler callbacks keyed
//! per ship (`AbilityReset`, `ReplenishActions`), so a re-trigger can never
//! leave two resets pending.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::pilot::ShipControls;
use crate::components::rotation::Rotation;
use crate::components::spaceship::{ShipBaseline, Spaceship};
use crate::components::sprite::Sprite;
use crate::components::status::Status;
use crate::components::team::Team;
use crate::components::weapon::Weapon;
use crate::resources::playarea::PlayArea;
use crate::resources::scheduler::{Purpose, ScheduleKey, Scheduler};
use crate::resources::worldtime::{DEFAULT_FPS, WorldTime};
use crate::spawn::spawn_projectile;

pub fn spaceship_update(
    area: Res<PlayArea>,
    mut ships: Query<(
        Entity,
        &mut Spaceship,
        &mut MapPosition,
        &Motion,
        &ShipControls,
        &Weapon,
        &Status,
    )>,
    mut commands: Commands,
) {
    for (entity, mut ship, mut position, motion, controls, weapon, status) in ships.iter_mut() {
        if !status.alive {
            continue;
        }
        ship.tick_timers();

        let steer = Vec2::new(controls.steer_axis() * motion.speed, 0.0);
        position.pos = area.clamp(position.pos + steer);

        if controls.ability && ship.can_activate() {
            commands.queue(move |world: &mut World| {
                activate_ability(world, entity);
            });
        }
        if controls.fire && weapon.ready {
            commands.queue(move |world: &mut World| {
                fire_weapon(world, entity);
            });
        }
    }
}

fn fps(world: &World) -> u32 {
    world
        .get_resource::<WorldTime>()
        .map(|t| t.fps)
        .unwrap_or(DEFAULT_FPS)
}

fn schedule<F>(world: &mut World, key: ScheduleKey, seconds: f32, callback: F)
where
    F: FnOnce(&mut World) + Send + Sync + 'static,
{
    if let Some(mut scheduler) = world.get_resource_mut::<Scheduler>() {
        scheduler.schedule(key, seconds, callback);
    }
}

/// Spend the ship's action point on its ability.
///
/// Applies the effect once and schedules the reset after the ability
/// duration. Returns `false` without touching anything while the ship has
/// no action point or is not idle.
pub fn activate_ability(world: &mut World, ship: Entity) -> bool {
    let fps = fps(world);
    let Some(mut spaceship) = world.get_mut::<Spaceship>(ship) else {
        return false;
    };
    if !spaceship.can_activate() {
        return false;
    }
    let ability = spaceship.ability;
    let duration = spaceship.begin_ability(fps);
    debug!(
        "{:?} activates '{}' for {}s: {}",
        ship, ability.name, duration, ability.message
    );
    ability.apply(world, ship);
    schedule(
        world,
        ScheduleKey::new(ship, Purpose::AbilityReset),
        duration,
        move |world: &mut World| reset_ability(world, ship),
    );
    true
}

/// Restore the ship's baseline stats and start the cooldown.
pub fn reset_ability(world: &mut World, ship: Entity) {
    let fps = fps(world);
    let Some(baseline) = world.get::<ShipBaseline>(ship).cloned() else {
        return;
    };
    if let Some(mut motion) = world.get_mut::<Motion>(ship) {
        motion.speed = baseline.speed;
    }
    if let Some(mut weapon) = world.get_mut::<Weapon>(ship) {
        weapon.set_stats(baseline.weapon);
    }
    if let Some(mut sprite) = world.get_mut::<Sprite>(ship) {
        sprite.key = baseline.sprite.clone();
    }
    if let Some(mut status) = world.get_mut::<Status>(ship) {
        status.collidable = baseline.collidable;
    }
    if let Some(mut health) = world.get_mut::<Health>(ship) {
        health.set_max(baseline.max_health);
    }
    let Some(mut spaceship) = world.get_mut::<Spaceship>(ship) else {
        return;
    };
    spaceship.set_ability_duration(baseline.ability_duration);
    spaceship.set_cooldown(baseline.cooldown);
    let cooldown = spaceship.begin_cooldown(fps);
    debug!("{:?} ability worn off, cooling down for {}s", ship, cooldown);
    schedule(
        world,
        ScheduleKey::new(ship, Purpose::ReplenishActions),
        cooldown,
        move |world: &mut World| replenish_actions(world, ship),
    );
}

/// Give the ship its action points back after the cooldown.
pub fn replenish_actions(world: &mut World, ship: Entity) {
    let actions = world
        .get::<ShipBaseline>(ship)
        .map(|b| b.actions)
        .unwrap_or(1);
    if let Some(mut spaceship) = world.get_mut::<Spaceship>(ship) {
        spaceship.replenish(actions);
        debug!("{:?} ability ready", ship);
    }
}

/// Fire the ship's weapon from its current position and facing.
///
/// Spawns one projectile per barrel and schedules the reload after
/// `1 / firerate` seconds. Returns the spawned projectiles, none while the
/// weapon is reloading.
pub fn fire_weapon(world: &mut World, ship: Entity) -> Vec<Entity> {
    let Some(pos) = world.get::<MapPosition>(ship).map(|p| p.pos) else {
        return Vec::new();
    };
    let team = world.get::<Team>(ship).copied().unwrap_or_default();
    let facing = world
        .get::<Rotation>(ship)
        .map(|r| r.degrees)
        .unwrap_or_else(|| team.facing_degrees());
    let Some(mut weapon) = world.get_mut::<Weapon>(ship) else {
        return Vec::new();
    };
    let shots = weapon.fire(ship, pos, facing, team);
    if shots.is_empty() {
        return Vec::new();
    }
    let reload = weapon.reload_seconds();
    schedule(
        world,
        ScheduleKey::new(ship, Purpose::Reload),
        reload,
        move |world: &mut World| {
            if let Some(mut weapon) = world.get_mut::<Weapon>(ship) {
                weapon.reload();
            }
        },
    );
    shots
        .iter()
        .map(|shot| spawn_projectile(world, shot))
        .collect()
}
