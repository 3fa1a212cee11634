//! Ability catalog.
//!
//! Every effect mutates the ship's tunable stats or spawns helpers. Stat
//! changes are undone when the ability wears off, because the reset restores
//! the ship's [`ShipBaseline`](crate::components::spaceship::ShipBaseline).

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::ability::Ability;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::spaceship::Spaceship;
use crate::components::sprite::Sprite;
use crate::components::status::Status;
use crate::components::team::Team;
use crate::components::weapon::{MAX_BARRELS, ShotSpec, Weapon};
use crate::spawn;

pub const SUPER_SPEED: f32 = 13.0;
pub const HYPERVELOCITY: f32 = 20.0;
pub const MACHINE_GUN_BONUS: f32 = 5.0;
pub const FANFIRE_MINES: usize = 11;
pub const FANFIRE_SPREAD: f32 = 100.0;
pub const MINE_SPEED: f32 = 2.0;
pub const MINE_DAMAGE: i32 = 12;

pub fn super_speed(world: &mut World, ship: Entity) {
    if let Some(mut motion) = world.get_mut::<Motion>(ship) {
        motion.speed = SUPER_SPEED;
    }
}

pub fn invisibility(world: &mut World, ship: Entity) {
    if let Some(mut status) = world.get_mut::<Status>(ship) {
        status.collidable = false;
    }
    if let Some(mut sprite) = world.get_mut::<Sprite>(ship) {
        sprite.key.push_str("_transparent");
    }
}

pub fn too_many_guns(world: &mut World, ship: Entity) {
    if let Some(mut weapon) = world.get_mut::<Weapon>(ship) {
        weapon.set_barrels(MAX_BARRELS);
    }
}

pub fn machine_gun(world: &mut World, ship: Entity) {
    if let Some(mut weapon) = world.get_mut::<Weapon>(ship) {
        let firerate = weapon.firerate() + MACHINE_GUN_BONUS;
        weapon.set_firerate(firerate);
    }
}

pub fn reflection(world: &mut World, ship: Entity) {
    let seconds = world
        .get::<Spaceship>(ship)
        .map(|s| s.ability_duration())
        .unwrap_or(0.0);
    spawn::spawn_reflector(world, ship, seconds);
}

pub fn buff_up(world: &mut World, ship: Entity) {
    if let Some(mut weapon) = world.get_mut::<Weapon>(ship) {
        let bonus = (2 / weapon.barrels() as i32).max(1);
        let damage = weapon.damage() + bonus;
        weapon.set_damage(damage);
    }
}

pub fn hypervelocity(world: &mut World, ship: Entity) {
    if let Some(mut weapon) = world.get_mut::<Weapon>(ship) {
        weapon.set_projectile_speed(HYPERVELOCITY);
    }
}

/// Lay a fan of slow, hard-hitting mines across the ship's forward arc.
pub fn fanfire(world: &mut World, ship: Entity) {
    let Some(pos) = world.get::<MapPosition>(ship).map(|p| p.pos) else {
        return;
    };
    let team = world.get::<Team>(ship).copied().unwrap_or_default();
    let step = FANFIRE_SPREAD / (FANFIRE_MINES - 1) as f32;
    for i in 0..FANFIRE_MINES {
        let facing = team.facing_degrees() - FANFIRE_SPREAD / 2.0 + i as f32 * step;
        let mine = ShotSpec {
            pos,
            facing,
            speed: MINE_SPEED,
            damage: MINE_DAMAGE,
            team,
            source: ship,
        };
        spawn::spawn_projectile_with(world, &mine, "others/bomb");
    }
}

pub fn catalog() -> [Ability; 9] {
    [
        Ability::new("super_speed", "Super speed!!!", super_speed),
        Ability::new("invisibility", "Invisibility!!!", invisibility),
        Ability::new("too_many_guns", "Quad fire!!!", too_many_guns),
        Ability::new("machine_gun", "Fire barrage!!!", machine_gun),
        Ability::new("reflection", "Reflector deployed!!!", reflection),
        Ability::new("buff_up", "Damage bonus!!!", buff_up),
        Ability::new("hypervelocity", "Bullets super speed!!!", hypervelocity),
        Ability::new("fanfire", "Mines deployed!!!", fanfire),
        Ability::none(),
    ]
}

/// Look an ability up by catalog name. Unknown names fall back to `none`.
pub fn by_name(name: &str) -> Ability {
    let wanted = name.trim().to_ascii_lowercase();
    match catalog().into_iter().find(|a| a.name == wanted) {
        Some(ability) => ability,
        None => {
            warn!("Unknown ability '{}', ship gets none", name);
            Ability::none()
        }
    }
}
