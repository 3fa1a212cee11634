//! Constructors for every kind of simulated object.
//!
//! Each constructor spawns the full component bundle, registers the entity
//! in the [`WorldRegistry`] (objects in draw order, effects apart) and, when
//! the object has a finite [`Lifespan`], schedules its `Expire` kill.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, trace};

use crate::abilities;
use crate::components::attachment::Attachments;
use crate::components::boxcollider::BoxCollider;
use crate::components::effect::Effect;
use crate::components::hazard::{Asteroid, Powerup, PowerupEffect, Reflector};
use crate::components::health::Health;
use crate::components::lifespan::Lifespan;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::pilot::{ControlSource, ShipControls};
use crate::components::projectile::Projectile;
use crate::components::rotation::{Rotation, Spin};
use crate::components::spaceship::{ShipBaseline, Spaceship};
use crate::components::sprite::Sprite;
use crate::components::status::Status;
use crate::components::team::{EntityKind, Team};
use crate::components::weapon::{ShotSpec, Weapon};
use crate::entity;
use crate::resources::gameconfig::ShipConfig;
use crate::resources::registry::WorldRegistry;
use crate::resources::scheduler::{Purpose, ScheduleKey, Scheduler};

pub const SHIP_SIZE: f32 = 50.0;
pub const PROJECTILE_SIZE: Vec2 = Vec2::new(6.0, 14.0);
/// Seconds a shot survives when it never hits anything or leaves the field.
pub const PROJECTILE_LIFESPAN: f32 = 10.0;
pub const ASTEROID_SIZE: f32 = 40.0;
pub const ASTEROID_HEALTH: i32 = 10;
pub const ASTEROID_DAMAGE: i32 = 1;
pub const POWERUP_SIZE: f32 = 30.0;
pub const POWERUP_SPEED: f32 = 1.5;
pub const REFLECTOR_SIZE: Vec2 = Vec2::new(100.0, 16.0);
/// How far ahead of its ship a reflector is deployed.
pub const REFLECTOR_DISTANCE: f32 = 60.0;
pub const EXPLOSION_FRAMES: u32 = 20;

/// Add `entity` to the object registry and arm its lifespan.
pub fn register(world: &mut World, entity: Entity) {
    if let Some(mut registry) = world.get_resource_mut::<WorldRegistry>() {
        registry.add_object(entity);
    }
    if let Some(seconds) = world.get::<Lifespan>(entity).and_then(|l| l.seconds()) {
        if let Some(mut scheduler) = world.get_resource_mut::<Scheduler>() {
            scheduler.schedule(
                ScheduleKey::new(entity, Purpose::Expire),
                seconds,
                move |world: &mut World| entity::kill(world, entity),
            );
        }
    }
}

pub fn ship_sprite(team: Team) -> &'static str {
    match team {
        Team::Enemy => "ships/enemy",
        Team::Player | Team::Neutral => "ships/player",
    }
}

/// Spawn a ship at `pos` built from `config`, facing its team's forward.
pub fn spawn_spaceship(
    world: &mut World,
    team: Team,
    pos: Vec2,
    config: &ShipConfig,
    control: ControlSource,
) -> Entity {
    let ability = abilities::by_name(&config.ability);
    let ship = Spaceship::new(ability, config.ability_duration, config.cooldown);
    let weapon = Weapon::new(config.weapon);
    let health = Health::new(config.health);
    let sprite = ship_sprite(team);
    let baseline = ShipBaseline {
        speed: config.speed,
        weapon: weapon.stats(),
        sprite: sprite.to_string(),
        actions: ship.actions,
        collidable: true,
        max_health: health.max(),
        ability_duration: ship.ability_duration(),
        cooldown: ship.cooldown(),
    };
    let facing = team.facing_degrees();
    let entity = world
        .spawn((
            MapPosition::from_vec(pos),
            Rotation::new(facing),
            Motion::facing(config.speed, facing),
            BoxCollider::centered(SHIP_SIZE, SHIP_SIZE),
            health,
            Status::default(),
            team,
            EntityKind::Spaceship,
            Sprite::new(sprite),
            Lifespan::Infinite,
        ))
        .insert((
            ship,
            baseline,
            weapon,
            control,
            ShipControls::default(),
            Attachments::default(),
        ))
        .id();
    register(world, entity);
    debug!(
        "Spawned {:?} ship {:?} with ability '{}'",
        team, entity, ability.name
    );
    entity
}

/// Spawn a standard shot.
pub fn spawn_projectile(world: &mut World, shot: &ShotSpec) -> Entity {
    spawn_projectile_with(world, shot, "projectiles/laser")
}

/// Spawn a shot with a custom look (mines, heavy rounds).
pub fn spawn_projectile_with(world: &mut World, shot: &ShotSpec, sprite: &str) -> Entity {
    let entity = world
        .spawn((
            MapPosition::from_vec(shot.pos),
            Rotation::new(shot.facing),
            Motion::facing(shot.speed, shot.facing),
            BoxCollider::centered(PROJECTILE_SIZE.x, PROJECTILE_SIZE.y),
            Health::new(1),
            Status::default(),
            shot.team,
            EntityKind::Projectile,
            Sprite::new(sprite),
            Lifespan::from_seconds(PROJECTILE_LIFESPAN),
            Projectile::new(shot.damage, Some(shot.source)),
        ))
        .id();
    register(world, entity);
    trace!("Spawned projectile {:?} from {:?}", entity, shot.source);
    entity
}

/// Spawn a drifting, spinning asteroid.
pub fn spawn_asteroid(
    world: &mut World,
    pos: Vec2,
    speed: f32,
    facing: f32,
    spin: f32,
) -> Entity {
    let entity = world
        .spawn((
            MapPosition::from_vec(pos),
            Rotation::new(0.0),
            Spin {
                degrees_per_frame: spin,
            },
            Motion::facing(speed, facing),
            BoxCollider::centered(ASTEROID_SIZE, ASTEROID_SIZE),
            Health::new(ASTEROID_HEALTH),
            Status::default(),
            Team::Neutral,
            EntityKind::Asteroid,
            Sprite::new("others/asteroid"),
            Lifespan::Infinite,
            Asteroid {
                damage: ASTEROID_DAMAGE,
            },
        ))
        .id();
    register(world, entity);
    entity
}

/// Spawn a powerup falling slowly down the field.
pub fn spawn_powerup(world: &mut World, pos: Vec2, effect: PowerupEffect) -> Entity {
    let entity = world
        .spawn((
            MapPosition::from_vec(pos),
            Rotation::new(0.0),
            Motion::facing(POWERUP_SPEED, 180.0),
            BoxCollider::centered(POWERUP_SIZE, POWERUP_SIZE),
            Health::new(1),
            Status::default(),
            Team::Neutral,
            EntityKind::Powerup,
            Sprite::new(effect.sprite()),
            Lifespan::Infinite,
            Powerup { effect },
        ))
        .id();
    register(world, entity);
    entity
}

/// Deploy a reflector in front of `owner`, attached to it for `seconds`.
/// Returns `None` when the owner has no position.
pub fn spawn_reflector(world: &mut World, owner: Entity, seconds: f32) -> Option<Entity> {
    let owner_pos = world.get::<MapPosition>(owner)?.pos;
    let team = world.get::<Team>(owner).copied().unwrap_or_default();
    let pos = owner_pos + Vec2::new(0.0, team.forward_sign() * REFLECTOR_DISTANCE);
    let entity = world
        .spawn((
            MapPosition::from_vec(pos),
            Rotation::new(team.facing_degrees()),
            BoxCollider::centered(REFLECTOR_SIZE.x, REFLECTOR_SIZE.y),
            Status::default(),
            team,
            EntityKind::Reflector,
            Sprite::new("others/reflector"),
            Lifespan::from_seconds(seconds),
            Reflector { owner: Some(owner) },
        ))
        .id();
    register(world, entity);
    entity::add_child(world, owner, entity);
    Some(entity)
}

/// Spawn a short-lived explosion effect. Effects are drawn but never collide.
pub fn spawn_explosion(world: &mut World, pos: Vec2) -> Entity {
    let entity = world
        .spawn((
            MapPosition::from_vec(pos),
            Rotation::new(0.0),
            Sprite::new("effects/explosion"),
            Effect::new(EXPLOSION_FRAMES),
        ))
        .id();
    if let Some(mut registry) = world.get_resource_mut::<WorldRegistry>() {
        registry.add_effect(entity);
    }
    entity
}
