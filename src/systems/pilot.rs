//! Pilot controls.
//!
//! Resolves every ship's [`ShipControls`] for the frame from its
//! [`ControlSource`]: keyboard ships copy the polled [`InputState`];
//! autopilots chase the nearest opposing ship, keep the trigger held and
//! now and then fire their ability.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::mapposition::MapPosition;
use crate::components::pilot::{ControlSource, ShipControls};
use crate::components::spaceship::Spaceship;
use crate::components::status::Status;
use crate::components::team::Team;
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;

/// Horizontal distance under which an autopilot stops steering.
pub const AUTOPILOT_DEADZONE: f32 = 5.0;
/// Per-frame probability that an autopilot triggers its ability.
pub const AUTOPILOT_ABILITY_CHANCE: f32 = 0.005;

pub fn pilot_controls(
    input: Res<InputState>,
    mut rng: ResMut<GameRng>,
    mut pilots: Query<
        (&ControlSource, &Team, &MapPosition, &Status, &mut ShipControls),
        With<Spaceship>,
    >,
    ships: Query<(&Team, &MapPosition, &Status), With<Spaceship>>,
) {
    for (source, team, position, status, mut controls) in pilots.iter_mut() {
        if !status.alive {
            *controls = ShipControls::default();
            continue;
        }
        *controls = match source {
            ControlSource::Keyboard => ShipControls {
                left: input.left,
                right: input.right,
                fire: input.space,
                ability: input.shift,
            },
            ControlSource::Autopilot => {
                let target = nearest_opponent(*team, position.pos, &ships);
                let dx = target.map(|t| t.x - position.pos.x).unwrap_or(0.0);
                ShipControls {
                    left: dx < -AUTOPILOT_DEADZONE,
                    right: dx > AUTOPILOT_DEADZONE,
                    fire: true,
                    ability: rng.chance(AUTOPILOT_ABILITY_CHANCE),
                }
            }
        };
    }
}

fn nearest_opponent(
    team: Team,
    from: Vec2,
    ships: &Query<(&Team, &MapPosition, &Status), With<Spaceship>>,
) -> Option<Vec2> {
    ships
        .iter()
        .filter(|(other, _, status)| status.alive && team.opposes(**other))
        .map(|(_, position, _)| position.pos)
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}
