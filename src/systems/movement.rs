//! Free movement.
//!
//! Moves every living object along its [`Motion`] by one frame's step and
//! turns spinning objects. Ships are steered by
//! [`spaceship_update`](crate::systems::spaceship::spaceship_update) instead,
//! and attached children are placed by
//! [`sync_attachments`](crate::systems::attachment::sync_attachments).
use bevy_ecs::prelude::*;

use crate::components::attachment::AttachedTo;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::rotation::{Rotation, Spin};
use crate::components::spaceship::Spaceship;
use crate::components::status::Status;

pub fn movement(
    mut movers: Query<
        (&mut MapPosition, &Motion, &Status),
        (Without<Spaceship>, Without<AttachedTo>),
    >,
    mut spinners: Query<(&mut Rotation, &Spin, &Status)>,
) {
    for (mut position, motion, status) in movers.iter_mut() {
        if status.alive {
            position.translate(motion.step());
        }
    }
    for (mut rotation, spin, status) in spinners.iter_mut() {
        if status.alive {
            rotation.rotate(spin.degrees_per_frame);
        }
    }
}
