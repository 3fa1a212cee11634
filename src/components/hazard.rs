//! Passive play-field objects: asteroids, powerups and reflectors.

use bevy_ecs::prelude::{Component, Entity};

use crate::components::health::Health;
use crate::components::weapon::{MAX_BARRELS, Weapon};

/// Drifting rock. Hurts ships it touches for `damage` and breaks on contact.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asteroid {
    pub damage: i32,
}

/// Wall that bounces projectiles back and hands them to its team.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    /// Ship that deployed it; reflected shots count as fired by this ship.
    pub owner: Option<Entity>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PowerupEffect {
    /// Restore hit points.
    Repair(i32),
    /// Extra shots per second until the next baseline reset.
    Rapidfire(f32),
    /// One more barrel (up to four) until the next baseline reset.
    ExtraBarrel,
}

impl PowerupEffect {
    pub fn sprite(&self) -> &'static str {
        match self {
            PowerupEffect::Repair(_) => "powerups/repair",
            PowerupEffect::Rapidfire(_) => "powerups/rapidfire",
            PowerupEffect::ExtraBarrel => "powerups/barrel",
        }
    }

    pub fn apply(&self, health: &mut Health, weapon: Option<&mut Weapon>) {
        match *self {
            PowerupEffect::Repair(amount) => health.heal(amount),
            PowerupEffect::Rapidfire(bonus) => {
                if let Some(weapon) = weapon {
                    weapon.set_firerate(weapon.firerate() + bonus);
                }
            }
            PowerupEffect::ExtraBarrel => {
                if let Some(weapon) = weapon {
                    if weapon.barrels() < MAX_BARRELS {
                        weapon.set_barrels(weapon.barrels() + 1);
                    }
                }
            }
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Powerup {
    pub effect: PowerupEffect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::weapon::WeaponStats;

    #[test]
    fn repair_heals_up_to_max() {
        let mut health = Health::new(10);
        health.damage(6);
        PowerupEffect::Repair(4).apply(&mut health, None);
        assert_eq!(health.current(), 8);
        PowerupEffect::Repair(40).apply(&mut health, None);
        assert_eq!(health.current(), 10);
    }

    #[test]
    fn extra_barrel_stops_at_four() {
        let mut health = Health::new(1);
        let mut weapon = Weapon::new(WeaponStats::new(1.0, 3, 1, 1.0));
        PowerupEffect::ExtraBarrel.apply(&mut health, Some(&mut weapon));
        assert_eq!(weapon.barrels(), 4);
        PowerupEffect::ExtraBarrel.apply(&mut health, Some(&mut weapon));
        assert_eq!(weapon.barrels(), 4);
    }

    #[test]
    fn rapidfire_adds_to_firerate() {
        let mut health = Health::new(1);
        let mut weapon = Weapon::new(WeaponStats::new(2.0, 1, 1, 1.0));
        PowerupEffect::Rapidfire(1.5).apply(&mut health, Some(&mut weapon));
        assert_eq!(weapon.firerate(), 3.5);
    }
}
