//! Time update system.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource by exactly one fixed frame.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

pub fn advance_world_time(mut time: ResMut<WorldTime>) {
    time.advance();
}
