use bevy_ecs::prelude::{Component, Entity};

/// Ballistic shot. `source` is the entity that fired it (or the owner of the
/// reflector that last bounced it); a ship never takes damage from its own
/// shots.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub damage: i32,
    pub source: Option<Entity>,
}

impl Projectile {
    pub fn new(damage: i32, source: Option<Entity>) -> Self {
        Self {
            damage: damage.max(0),
            source,
        }
    }
}
