//! The simulation context.
//!
//! [`Simulation`] owns the ECS [`World`] with every resource the systems
//! need and the single chained per-frame [`Schedule`]. Nothing is global:
//! two simulations can run side by side.
//!
//! # Frame flow
//!
//! 1. [`Simulation::step`] stores the polled [`InputState`]
//! 2. The schedule runs the systems in the order listed in
//!    [`crate::systems`]; commands queued by a system are applied before the
//!    next one runs
//! 3. The step reports whether the game is still running

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::pilot::ControlSource;
use crate::components::team::Team;
use crate::resources::gameconfig::{GameConfig, ShipConfig};
use crate::resources::input::InputState;
use crate::resources::playarea::PlayArea;
use crate::resources::registry::{EndGame, WorldRegistry};
use crate::resources::rng::GameRng;
use crate::resources::scheduler::Scheduler;
use crate::resources::worldtime::WorldTime;
use crate::snapshot::{FrameSnapshot, take_snapshot};
use crate::spawn::spawn_spaceship;
use crate::systems::attachment::sync_attachments;
use crate::systems::collision::{collision_detector, collision_observer};
use crate::systems::effects::effects_update;
use crate::systems::environment::environment_spawner;
use crate::systems::movement::movement;
use crate::systems::pilot::pilot_controls;
use crate::systems::scheduler::fire_scheduled_callbacks;
use crate::systems::spaceship::spaceship_update;
use crate::systems::sweep::sweep_dead;
use crate::systems::time::advance_world_time;
use crate::systems::vitality::vitality;

/// Distance of the starting ships from the top and bottom edges.
const SHIP_EDGE_DISTANCE: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Running,
    Finished(EndGame),
    /// Escape was pressed; the frame was not simulated.
    Quit,
}

pub struct Simulation {
    world: World,
    schedule: Schedule,
}

impl Simulation {
    /// A world with the player and the boss in their starting positions.
    pub fn new(config: &GameConfig) -> Self {
        let mut sim = Self::empty(config);
        let area = *sim.world.resource::<PlayArea>();
        let player_pos = Vec2::new(area.width * 0.5, area.height - SHIP_EDGE_DISTANCE);
        let boss_pos = Vec2::new(area.width * 0.5, SHIP_EDGE_DISTANCE);
        sim.spawn_player(player_pos, &config.player);
        sim.spawn_boss(boss_pos, &config.boss);
        info!(
            "Simulation ready: {}x{} field at {} fps",
            config.width, config.height, config.fps
        );
        sim
    }

    /// A world with every resource in place and no objects.
    pub fn empty(config: &GameConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::with_fps(config.fps));
        world.insert_resource(Scheduler::new(config.fps));
        world.insert_resource(WorldRegistry::new(config.object_limit));
        world.insert_resource(PlayArea::new(
            config.width as f32,
            config.height as f32,
            config.margin as f32,
        ));
        world.insert_resource(GameRng::seeded(config.seed));
        world.insert_resource(InputState::default());
        world.insert_resource(config.clone());

        world.spawn(Observer::new(collision_observer));
        // Ensure the observer is registered before we run any systems that may trigger events.
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                advance_world_time,
                environment_spawner,
                pilot_controls,
                collision_detector,
                movement,
                spaceship_update,
                sync_attachments,
                vitality,
                effects_update,
                sweep_dead,
                fire_scheduled_callbacks,
            )
                .chain(),
        );

        Self { world, schedule }
    }

    fn control_for(config: &ShipConfig) -> ControlSource {
        if config.autopilot {
            ControlSource::Autopilot
        } else {
            ControlSource::Keyboard
        }
    }

    /// Spawn the ship whose death loses the game.
    pub fn spawn_player(&mut self, pos: Vec2, config: &ShipConfig) -> Entity {
        let control = Self::control_for(config);
        let ship = spawn_spaceship(&mut self.world, Team::Player, pos, config, control);
        self.world.resource_mut::<WorldRegistry>().player = Some(ship);
        ship
    }

    /// Spawn the ship whose death wins the game.
    pub fn spawn_boss(&mut self, pos: Vec2, config: &ShipConfig) -> Entity {
        let control = Self::control_for(config);
        let ship = spawn_spaceship(&mut self.world, Team::Enemy, pos, config, control);
        self.world.resource_mut::<WorldRegistry>().boss = Some(ship);
        ship
    }

    /// Simulate one frame with `input` held.
    pub fn step(&mut self, input: InputState) -> StepOutcome {
        if input.escape {
            return StepOutcome::Quit;
        }
        *self.world.resource_mut::<InputState>() = input;
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();

        match self.end_game() {
            EndGame::Playing => StepOutcome::Running,
            outcome => StepOutcome::Finished(outcome),
        }
    }

    /// Simulate up to `frames` frames, stopping early on an outcome or quit.
    pub fn run(&mut self, frames: u64, input: InputState) -> StepOutcome {
        let mut outcome = StepOutcome::Running;
        for _ in 0..frames {
            outcome = self.step(input);
            if outcome != StepOutcome::Running {
                break;
            }
        }
        outcome
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        take_snapshot(&self.world)
    }

    pub fn end_game(&self) -> EndGame {
        self.world.resource::<WorldRegistry>().end_game
    }

    pub fn player(&self) -> Option<Entity> {
        self.world.resource::<WorldRegistry>().player
    }

    pub fn boss(&self) -> Option<Entity> {
        self.world.resource::<WorldRegistry>().boss
    }

    pub fn frame(&self) -> u64 {
        self.world.resource::<WorldTime>().frame_count
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
