//! Kills objects that left the field or ran out of health.
use bevy_ecs::prelude::*;

use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::status::Status;
use crate::resources::playarea::PlayArea;

pub fn vitality(
    area: Res<PlayArea>,
    mut objects: Query<(&MapPosition, &mut Status, Option<&Health>)>,
) {
    for (position, mut status, health) in objects.iter_mut() {
        if !status.alive {
            continue;
        }
        let out_of_bounds = !area.contains_with_margin(position.pos);
        let depleted = health.is_some_and(|h| h.is_depleted());
        if out_of_bounds || depleted {
            status.kill();
        }
    }
}
