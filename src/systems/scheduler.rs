//! Fires the scheduler callbacks due this frame.
//!
//! Exclusive: callbacks get full `&mut World` access. Callbacks scheduled
//! while these run wait for the next frame.
use bevy_ecs::prelude::*;

use crate::resources::scheduler::Scheduler;

pub fn fire_scheduled_callbacks(world: &mut World) {
    let due = match world.get_resource_mut::<Scheduler>() {
        Some(mut scheduler) => scheduler.tick(),
        None => return,
    };
    for callback in due {
        callback(world);
    }
}
