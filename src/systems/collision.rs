//! Collision detection and dispatch.
//!
//! [`collision_detector`] snapshots every collidable, living object (in
//! registry order) and tests each cross-team pair for AABB overlap. For every
//! overlapping pair it triggers two [`CollisionEvent`]s, one per side.
//! [`collision_observer`] applies the rules of the receiving side to that
//! side only:
//!
//! | self       | other       | effect on self                                |
//! |------------|-------------|-----------------------------------------------|
//! | Spaceship  | Asteroid    | damage by the asteroid's damage               |
//! | Spaceship  | Projectile  | damage by the projectile's, unless own shot   |
//! | Spaceship  | Spaceship   | damage 1                                      |
//! | Spaceship  | Powerup     | effect applied (non-enemy ships only)         |
//! | Asteroid   | Projectile  | damage by the projectile's damage             |
//! | Asteroid   | Spaceship   | destroyed                                     |
//! | Projectile | Reflector   | reversed, joins the reflector's team          |
//! | Projectile | Powerup     | passes through                                |
//! | Projectile | anything    | destroyed, leaves an explosion                |
//! | Powerup    | Spaceship   | consumed (non-enemy ships only)               |
//!
//! Both sides of a pair resolve in the same frame, so a projectile and the
//! ship it hits can both die.
//!
//! The check is O(n²) over live objects; the registry's object cap keeps n
//! small.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::boxcollider::BoxCollider;
use crate::components::hazard::{Asteroid, Powerup, Reflector};
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::motion::{Motion, Surface};
use crate::components::projectile::Projectile;
use crate::components::rotation::Rotation;
use crate::components::status::Status;
use crate::components::team::{EntityKind, Team};
use crate::components::weapon::Weapon;
use crate::events::collision::{CollisionEvent, CollisionInfo};
use crate::resources::registry::WorldRegistry;
use crate::spawn::spawn_explosion;

/// Damage dealt to each ship when two ships ram each other.
pub const RAM_DAMAGE: i32 = 1;

pub fn collision_detector(
    registry: Res<WorldRegistry>,
    colliders: Query<(
        &MapPosition,
        &BoxCollider,
        &Status,
        &Team,
        &EntityKind,
        Option<&Projectile>,
        Option<&Asteroid>,
        Option<&Reflector>,
        Option<&Powerup>,
    )>,
    mut commands: Commands,
) {
    let mut live: Vec<(CollisionInfo, MapPosition, BoxCollider)> = Vec::new();
    for &entity in registry.objects.iter() {
        let Ok((position, collider, status, team, kind, projectile, asteroid, reflector, powerup)) =
            colliders.get(entity)
        else {
            continue;
        };
        if !status.can_collide() {
            continue;
        }
        let damage = projectile
            .map(|p| p.damage)
            .or(asteroid.map(|a| a.damage))
            .unwrap_or(0);
        let source = projectile
            .and_then(|p| p.source)
            .or(reflector.and_then(|r| r.owner));
        let info = CollisionInfo {
            entity,
            kind: *kind,
            team: *team,
            damage,
            source,
            powerup: powerup.map(|p| p.effect),
        };
        live.push((info, *position, *collider));
    }

    for (i, (info_a, position_a, collider_a)) in live.iter().enumerate() {
        for (info_b, position_b, collider_b) in live.iter().skip(i + 1) {
            if !info_a.team.opposes(info_b.team) {
                continue;
            }
            if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
                trace!(
                    "Collision between {:?} {:?} and {:?} {:?}",
                    info_a.kind, info_a.entity, info_b.kind, info_b.entity
                );
                commands.trigger(CollisionEvent {
                    entity: info_a.entity,
                    other: *info_b,
                });
                commands.trigger(CollisionEvent {
                    entity: info_b.entity,
                    other: *info_a,
                });
            }
        }
    }
}

pub fn collision_observer(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    mut targets: Query<(
        &EntityKind,
        &MapPosition,
        &mut Team,
        &mut Status,
        Option<&mut Health>,
        Option<&mut Motion>,
        Option<&mut Rotation>,
        Option<&mut Projectile>,
        Option<&mut Weapon>,
    )>,
) {
    let event = trigger.event();
    let other = event.other;
    let Ok((
        kind,
        position,
        mut team,
        mut status,
        mut health,
        motion,
        rotation,
        projectile,
        mut weapon,
    )) = targets.get_mut(event.entity)
    else {
        return;
    };

    match (*kind, other.kind) {
        (EntityKind::Spaceship, EntityKind::Asteroid) => {
            hurt(health.as_deref_mut(), &mut status, other.damage)
        }
        (EntityKind::Spaceship, EntityKind::Projectile) => {
            if other.source != Some(event.entity) {
                hurt(health.as_deref_mut(), &mut status, other.damage);
            }
        }
        (EntityKind::Spaceship, EntityKind::Spaceship) => {
            hurt(health.as_deref_mut(), &mut status, RAM_DAMAGE)
        }
        (EntityKind::Spaceship, EntityKind::Powerup) => {
            if *team != Team::Enemy {
                if let (Some(effect), Some(health)) = (other.powerup, health.as_deref_mut()) {
                    effect.apply(health, weapon.as_deref_mut());
                }
            }
        }
        (EntityKind::Asteroid, EntityKind::Projectile) => {
            hurt(health.as_deref_mut(), &mut status, other.damage)
        }
        (EntityKind::Asteroid, EntityKind::Spaceship) => status.kill(),
        (EntityKind::Projectile, EntityKind::Reflector) => {
            if let Some(mut motion) = motion {
                motion.bounce(Surface::Reverse);
            }
            if let Some(mut rotation) = rotation {
                rotation.rotate(180.0);
            }
            if let Some(mut projectile) = projectile {
                projectile.source = other.source;
            }
            *team = other.team;
        }
        (EntityKind::Projectile, EntityKind::Powerup) => {}
        (EntityKind::Projectile, _) => {
            status.kill();
            let pos = position.pos;
            commands.queue(move |world: &mut World| {
                spawn_explosion(world, pos);
            });
        }
        (EntityKind::Powerup, EntityKind::Spaceship) => {
            if other.team != Team::Enemy {
                status.kill();
            }
        }
        _ => {}
    }
}

fn hurt(health: Option<&mut Health>, status: &mut Status, amount: i32) {
    if let Some(health) = health {
        health.damage(amount);
        if health.is_depleted() {
            status.kill();
        }
    }
}
