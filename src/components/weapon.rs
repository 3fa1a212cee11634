//! Firing-rate gated, multi-barrel gun mounted on a ship.
//!
//! [`Weapon::fire`] is the pure half of shooting: it checks `ready`, computes
//! one [`ShotSpec`] per barrel and flips `ready` off. The caller spawns the
//! projectiles and schedules the reload after [`Weapon::reload_seconds`]
//! under the `(mount, Purpose::Reload)` key, so overlapping reloads collapse
//! into one.
//!
//! Muzzle offsets are a fixed table relative to the mount, expressed for a
//! ship facing up and rotated with the mount's facing.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;

use crate::components::team::Team;

pub const MAX_BARRELS: u8 = 4;
pub const MIN_FIRERATE: f32 = 0.1;

/// Muzzle offsets for a mount facing up, by barrel count.
pub fn muzzle_offsets(barrels: u8) -> ArrayVec<Vec2, 4> {
    let table: &[Vec2] = match barrels {
        2 => &[Vec2::new(-8.0, -50.0), Vec2::new(8.0, -50.0)],
        3 => &[
            Vec2::new(-20.0, 0.0),
            Vec2::new(0.0, -50.0),
            Vec2::new(20.0, 0.0),
        ],
        4 => &[
            Vec2::new(-20.0, 0.0),
            Vec2::new(-8.0, -50.0),
            Vec2::new(8.0, -50.0),
            Vec2::new(20.0, 0.0),
        ],
        _ => &[Vec2::new(0.0, -50.0)],
    };
    table.iter().copied().collect()
}

/// Barrel counts outside `1..=4` fall back to a single barrel.
pub fn sanitize_barrels(barrels: u8) -> u8 {
    if barrels == 0 || barrels > MAX_BARRELS {
        1
    } else {
        barrels
    }
}

/// Tunable weapon numbers, also stored in the ship baseline snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    /// Shots per second.
    pub firerate: f32,
    pub barrels: u8,
    pub damage: i32,
    pub projectile_speed: f32,
}

impl Default for WeaponStats {
    fn default() -> Self {
        Self {
            firerate: 3.0,
            barrels: 1,
            damage: 5,
            projectile_speed: 8.0,
        }
    }
}

impl WeaponStats {
    pub fn new(firerate: f32, barrels: u8, damage: i32, projectile_speed: f32) -> Self {
        Self {
            firerate,
            barrels,
            damage,
            projectile_speed,
        }
        .sanitized()
    }

    pub fn sanitized(mut self) -> Self {
        self.firerate = if self.firerate.is_finite() {
            self.firerate.max(MIN_FIRERATE)
        } else {
            MIN_FIRERATE
        };
        self.barrels = sanitize_barrels(self.barrels);
        self.damage = self.damage.max(0);
        self.projectile_speed = self.projectile_speed.max(0.0);
        self
    }
}

/// Everything needed to spawn one projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotSpec {
    pub pos: Vec2,
    pub facing: f32,
    pub speed: f32,
    pub damage: i32,
    pub team: Team,
    pub source: Entity,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Weapon {
    stats: WeaponStats,
    pub ready: bool,
}

impl Weapon {
    pub fn new(stats: WeaponStats) -> Self {
        Self {
            stats: stats.sanitized(),
            ready: true,
        }
    }

    pub fn stats(&self) -> WeaponStats {
        self.stats
    }

    /// Replace all stats at once (used by the baseline reset).
    pub fn set_stats(&mut self, stats: WeaponStats) {
        self.stats = stats.sanitized();
    }

    pub fn firerate(&self) -> f32 {
        self.stats.firerate
    }

    pub fn set_firerate(&mut self, firerate: f32) {
        self.stats.firerate = firerate;
        self.stats = self.stats.sanitized();
    }

    pub fn barrels(&self) -> u8 {
        self.stats.barrels
    }

    /// Values above four collapse to one barrel.
    pub fn set_barrels(&mut self, barrels: u8) {
        self.stats.barrels = sanitize_barrels(barrels);
    }

    pub fn damage(&self) -> i32 {
        self.stats.damage
    }

    pub fn set_damage(&mut self, damage: i32) {
        self.stats.damage = damage.max(0);
    }

    pub fn projectile_speed(&self) -> f32 {
        self.stats.projectile_speed
    }

    pub fn set_projectile_speed(&mut self, speed: f32) {
        self.stats.projectile_speed = speed.max(0.0);
    }

    pub fn reload_seconds(&self) -> f32 {
        1.0 / self.stats.firerate
    }

    /// Muzzle positions for a mount at `mount_pos` facing `facing` degrees.
    pub fn muzzles(&self, mount_pos: Vec2, facing: f32) -> ArrayVec<Vec2, 4> {
        let rotation = Vec2::from_angle(facing.to_radians());
        muzzle_offsets(self.stats.barrels)
            .into_iter()
            .map(|offset| mount_pos + rotation.rotate(offset))
            .collect()
    }

    /// Pull the trigger. Returns no shots while reloading.
    pub fn fire(
        &mut self,
        mount: Entity,
        mount_pos: Vec2,
        facing: f32,
        team: Team,
    ) -> ArrayVec<ShotSpec, 4> {
        if !self.ready {
            return ArrayVec::new();
        }
        self.ready = false;
        self.muzzles(mount_pos, facing)
            .into_iter()
            .map(|pos| ShotSpec {
                pos,
                facing,
                speed: self.stats.projectile_speed,
                damage: self.stats.damage,
                team,
                source: mount,
            })
            .collect()
    }

    pub fn reload(&mut self) {
        self.ready = true;
    }
}
